pub mod config;
pub mod http;
pub mod mock;
pub mod state;
