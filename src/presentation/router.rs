use crate::infrastructure::state::AppState;
use crate::presentation::handlers;
use crate::presentation::middleware::{rate_limit::auth_rate_limit_layer, route_guard::route_guard};
use crate::presentation::routes;
use axum::{Router, middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> anyhow::Result<Router> {
    let auth_routes =
        routes::auth::routes().layer(auth_rate_limit_layer(state.config.rate_limit_per_minute)?);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(routes::pages::routes())
        .nest("/auth", auth_routes)
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
