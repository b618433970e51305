use authdeck::infrastructure::{config::Config, state::AppState};
use authdeck::presentation;

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_with_signal().await
}

async fn run_with_signal() -> anyhow::Result<()> {
    run(None, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// `port` overrides the configured one; tests pass `Some(0)`.
async fn run<F>(port: Option<u16>, shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    // Tests may call this more than once, so a second init is ignored
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "authdeck=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let mut config = Config::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }

    let (listener, app) = bootstrap(config).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    Ok(())
}

async fn bootstrap(config: Config) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(backend = %config.api_base_url, "using auth backend");

    let state = AppState::from_config(config)?;
    let app = presentation::router::app(state)?;

    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
