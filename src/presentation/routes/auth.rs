use crate::infrastructure::state::AppState;
use crate::presentation::handlers::auth;
use axum::{Router, routing::post};

/// Form posts from the entry page and the dashboard menu
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/forgot", post(auth::forgot))
        .route("/logout", post(auth::logout))
        .route("/{purpose}/resend", post(auth::resend_otp))
}
