pub mod auth_api;
pub mod decoder;
pub mod fetch;
pub mod fetch_with_auth;
