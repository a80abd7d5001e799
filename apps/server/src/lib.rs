pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::browser::{ChromiumFetcher, PageFetcher};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn PageFetcher>,
}

/// Build the router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/quizlet-set/:set_id", get(routes::quizlet::export_set))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(routes::cors::cors_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        fetcher: Arc::new(ChromiumFetcher::new(&config)),
        config: Arc::new(config),
    };

    let addr = state.config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on port {}", state.config.port);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
