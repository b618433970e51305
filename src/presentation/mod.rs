pub mod dtos;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod navigation;
pub mod router;
pub mod routes;
pub mod views;
