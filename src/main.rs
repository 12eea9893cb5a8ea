mod answer;
mod config;
mod context;
mod directory_client;
mod errors;
mod handlers;
mod llm_client;
mod logs_client;
mod matcher;
mod models;
mod normalizer;
mod service;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::AppState;
use crate::service::RagService;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, builds the outbound clients and
/// starts the Axum server with CORS, request tracing and a body-size limit.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rag_persons_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Build the pipeline orchestrator (directory, completion and audit clients)
    let rag = RagService::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize service clients: {}", e))?;
    tracing::info!("RAG pipeline initialized");

    let app_state = Arc::new(AppState { rag });

    // API routes behind a request body limit; /health stays outside so
    // orchestrator probes always get through.
    let api_routes = Router::new()
        .route("/rag", post(handlers::rag))
        .route("/rag_full", post(handlers::rag_full))
        .route("/check_llm", get(handlers::check_llm))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)));

    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
