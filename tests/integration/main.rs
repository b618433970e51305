#[path = "../common/mod.rs"]
pub mod common;

mod guard;
mod health;
mod middleware;
mod profile;
