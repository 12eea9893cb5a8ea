use crate::errors::AppError;
use crate::models::{CompletionResult, Person, QueryBody, RagDebugResponse};
use crate::service::RagService;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// RAG pipeline orchestrator.
    pub rag: RagService,
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rag-persons-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /rag
///
/// Frontend endpoint: runs the pipeline and returns only the persons the
/// model's answer names. Downstream-service failures degrade to an empty
/// list rather than an error status.
pub async fn rag(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Result<Json<Vec<Person>>, AppError> {
    tracing::info!("POST /rag - consulta: {}", body.consulta);

    if body.consulta.trim().is_empty() {
        return Err(AppError::BadRequest("consulta must not be empty".to_string()));
    }

    let personas = state.rag.process(&body.consulta).await;
    Ok(Json(personas))
}

/// POST /rag_full
///
/// Debugging endpoint: matched persons plus the model's answer and the raw
/// provider payload, for validating the whole pipeline.
pub async fn rag_full(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Result<Json<RagDebugResponse>, AppError> {
    tracing::info!("POST /rag_full - consulta: {}", body.consulta);

    if body.consulta.trim().is_empty() {
        return Err(AppError::BadRequest("consulta must not be empty".to_string()));
    }

    let resultado = state.rag.process_with_debug(&body.consulta).await;
    Ok(Json(resultado))
}

/// GET /check_llm
///
/// Probes the completion endpoint with a canned query, bypassing the
/// directory. Returns the raw completion result, configured or not.
pub async fn check_llm(State(state): State<Arc<AppState>>) -> Json<CompletionResult> {
    Json(state.rag.check_llm().await)
}
