pub mod rate_limit;
pub mod route_guard;
