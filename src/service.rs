//! Pipeline orchestration: fetch, normalize, render, complete, match, audit.
//!
//! The orchestrator is the only component that knows the full sequence.
//! Downstream-service failures never propagate: a failed directory fetch
//! degrades to zero records and a failed completion to no answer, so the
//! caller only ever observes fewer or no matched persons.

use crate::config::Config;
use crate::context::{render_context, trim_text, MAX_CONTEXT_CHARS};
use crate::directory_client::DirectoryClient;
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::logs_client::{AuditLogger, ACTION_LLM_CONSULT};
use crate::matcher::match_persons;
use crate::models::{CompletionResult, Person, RagDebugResponse};
use crate::normalizer::normalize_person;
use serde_json::json;

/// Orchestrates one RAG invocation end-to-end. Stateless across requests:
/// every invocation owns its data from fetch to response.
#[derive(Clone)]
pub struct RagService {
    directory: DirectoryClient,
    completion: CompletionClient,
    audit: AuditLogger,
    max_context_persons: usize,
    log_llm_responses: bool,
}

impl RagService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            directory: DirectoryClient::new(
                config.persons_api_url.clone(),
                config.persons_timeout,
            )?,
            completion: CompletionClient::new(
                config.llm_api_url.clone(),
                config.llm_api_key.clone(),
                config.llm_model.clone(),
                config.llm_timeout,
            )?,
            audit: AuditLogger::new(config.logs_service_url.clone(), config.logs_timeout)?,
            max_context_persons: config.max_context_persons,
            log_llm_responses: config.log_llm_responses,
        })
    }

    /// Main pipeline: returns only the persons the model's answer names.
    pub async fn process(&self, consulta: &str) -> Vec<Person> {
        self.process_with_debug(consulta).await.personas
    }

    /// Same pipeline, but the response keeps the model's answer and the raw
    /// provider payload for diagnostics.
    pub async fn process_with_debug(&self, consulta: &str) -> RagDebugResponse {
        tracing::info!("Running RAG pipeline for query: {}", consulta);

        let raw_records = match self.directory.fetch_persons().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Directory fetch failed, proceeding with no records: {}", e);
                Vec::new()
            }
        };

        let persons: Vec<Person> = raw_records.iter().map(normalize_person).collect();
        if persons.is_empty() {
            return RagDebugResponse {
                personas: Vec::new(),
                answer: None,
                raw: None,
            };
        }

        let bounded = &persons[..persons.len().min(self.max_context_persons)];
        let context = trim_text(&render_context(bounded), MAX_CONTEXT_CHARS);

        let completion = self.completion.complete(consulta, &context).await;
        if let Some(ref error) = completion.error {
            tracing::warn!("Completion failed, matching against no answer: {}", error);
        }

        let matched = match_persons(&persons, completion.answer.as_deref());
        tracing::info!("Matched {} of {} person(s)", matched.len(), persons.len());

        if self.log_llm_responses {
            self.audit.spawn_log(
                ACTION_LLM_CONSULT,
                json!({
                    "consulta": consulta,
                    "respuesta": completion.answer.as_deref(),
                }),
            );
        }

        RagDebugResponse {
            personas: matched,
            answer: completion.answer,
            raw: completion.raw,
        }
    }

    /// Direct completion probe used by the `/check_llm` diagnostic route.
    pub async fn check_llm(&self) -> CompletionResult {
        self.completion.complete("Hola, ¿qué fecha es hoy?", "").await
    }
}
