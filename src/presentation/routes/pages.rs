use crate::domain::session::{DASHBOARD_PATH, ENTRY_PATH};
use crate::infrastructure::state::AppState;
use crate::presentation::handlers::pages;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(ENTRY_PATH, get(pages::auth_page))
        .route(DASHBOARD_PATH, get(pages::dashboard_page))
        .route("/dashboard/profile", get(pages::profile_page))
}
