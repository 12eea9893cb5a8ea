//! RAG Persons API Library
//!
//! This library implements a retrieval-augmented-generation pipeline over a
//! persons directory: it fetches person records from the directory service,
//! renders them into a textual context, asks an LLM completion endpoint a
//! natural-language question against that context, and filters the records
//! down to those the model's answer actually names.
//!
//! # Modules
//!
//! - `answer`: Answer extraction (reasoning-markup stripping).
//! - `config`: Configuration management.
//! - `context`: Context rendering for the model prompt.
//! - `directory_client`: Persons directory service client.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `llm_client`: LLM completion endpoint client.
//! - `logs_client`: Audit log service client.
//! - `matcher`: Answer-to-record reconciliation.
//! - `models`: Core data models.
//! - `normalizer`: Source record normalization.
//! - `service`: Pipeline orchestration.

pub mod answer;
pub mod config;
pub mod context;
pub mod directory_client;
pub mod errors;
pub mod handlers;
pub mod llm_client;
pub mod logs_client;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod service;
