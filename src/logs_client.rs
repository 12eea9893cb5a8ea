use crate::errors::AppError;
use chrono::Utc;
use serde_json::{json, Value};
use std::time::Duration;

/// Audit action recorded for every completed pipeline run.
pub const ACTION_LLM_CONSULT: &str = "LLM_CONSULT";

/// Service identifier stamped on outgoing audit entries.
const SERVICE_NAME: &str = "rag-persons-api";

/// Client for the audit log service. Delivery is best-effort: failures are
/// logged locally and swallowed, never surfaced to the pipeline.
#[derive(Clone)]
pub struct AuditLogger {
    client: reqwest::Client,
    logs_url: String,
}

impl AuditLogger {
    pub fn new(logs_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, logs_url })
    }

    /// Posts one audit entry: `{timestamp, action, service, details}` with a
    /// UTC ISO-8601 timestamp. No retry, no response validation.
    pub async fn register_log(&self, action: &str, details: Value) {
        let entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "action": action,
            "service": SERVICE_NAME,
            "details": details,
        });

        match self.client.post(&self.logs_url).json(&entry).send().await {
            Ok(_) => tracing::debug!("Audit log delivered: {}", action),
            Err(e) => tracing::warn!("Failed to deliver audit log: {}", e),
        }
    }

    /// Dispatches an audit entry on a detached task. The task never joins
    /// the request path, so audit latency and failures cannot gate the
    /// response.
    pub fn spawn_log(&self, action: &'static str, details: Value) {
        let logger = self.clone();
        tokio::spawn(async move {
            logger.register_log(action, details).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let logger = AuditLogger::new(
            "http://logs-service:3005/logs".to_string(),
            Duration::from_secs(5),
        );
        assert!(logger.is_ok());
    }

    #[tokio::test]
    async fn unreachable_logs_service_is_swallowed() {
        // Port 9 (discard) refuses connections on test machines; the call
        // must return without panicking either way.
        let logger = AuditLogger::new(
            "http://127.0.0.1:9/logs".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();

        logger
            .register_log(ACTION_LLM_CONSULT, json!({"consulta": "x"}))
            .await;
    }
}
