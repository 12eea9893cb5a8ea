use crate::errors::AppError;
use serde_json::Value;
use std::time::Duration;

/// Client for the persons directory service.
#[derive(Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    persons_url: String,
}

impl DirectoryClient {
    /// Creates a new `DirectoryClient`.
    ///
    /// # Arguments
    ///
    /// * `persons_url` - Full URL of the directory's persons listing.
    /// * `timeout` - Per-request timeout budget.
    pub fn new(persons_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            persons_url,
        })
    }

    /// Fetches every person record the directory currently holds.
    ///
    /// The directory responds with `{"data": [ ...records... ]}`. A response
    /// that parses but lacks a `data` array is treated as zero records; the
    /// caller decides how to degrade transport and status failures.
    pub async fn fetch_persons(&self) -> Result<Vec<Value>, AppError> {
        tracing::info!("Fetching persons from directory: {}", self.persons_url);

        let response = self
            .client
            .get(&self.persons_url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Directory request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Directory returned {}: {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse directory response: {}", e))
        })?;

        match body.get("data").and_then(Value::as_array) {
            Some(records) => {
                tracing::info!("Directory returned {} person(s)", records.len());
                Ok(records.clone())
            }
            None => {
                tracing::warn!("Directory response missing 'data' array, treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DirectoryClient::new(
            "https://example.com/persons".to_string(),
            Duration::from_secs(10),
        );
        assert!(client.is_ok());
    }
}
