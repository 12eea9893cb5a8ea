use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub llm_api_url: Option<String>, // Optional: the completion client degrades when absent
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub persons_api_url: String,
    pub persons_timeout: Duration,
    pub logs_service_url: String,
    pub logs_timeout: Duration,
    pub max_context_persons: usize,
    pub log_llm_responses: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            llm_api_url: std::env::var("LLM_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("LLM_API_URL must start with http:// or https://");
                    }
                    Ok(url)
                })
                .transpose()?,
            llm_api_key: std::env::var("LLM_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
            llm_timeout: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| anyhow::anyhow!("LLM_TIMEOUT_SECS must be a number of seconds"))?,
            persons_api_url: std::env::var("PERSONS_API_URL")
                .unwrap_or_else(|_| "http://ms-consulta:3002/persons".to_string()),
            persons_timeout: std::env::var("PERSONS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| anyhow::anyhow!("PERSONS_TIMEOUT_SECS must be a number of seconds"))?,
            logs_service_url: std::env::var("LOGS_SERVICE_URL")
                .unwrap_or_else(|_| "http://logs-service:3005/logs".to_string()),
            logs_timeout: std::env::var("LOGS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| anyhow::anyhow!("LOGS_TIMEOUT_SECS must be a number of seconds"))?,
            max_context_persons: std::env::var("MAX_CONTEXT_PERSONS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_CONTEXT_PERSONS must be a positive number"))?,
            log_llm_responses: std::env::var("LOG_LLM_RESPONSES")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        };

        if !config.persons_api_url.starts_with("http://")
            && !config.persons_api_url.starts_with("https://")
        {
            anyhow::bail!("PERSONS_API_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Persons API URL: {}", config.persons_api_url);
        tracing::debug!("Logs service URL: {}", config.logs_service_url);
        if let Some(ref url) = config.llm_api_url {
            tracing::info!("LLM endpoint configured: {} (model {})", url, config.llm_model);
        } else {
            tracing::warn!("LLM endpoint not configured; completions will be skipped");
        }
        tracing::debug!("Max context persons: {}", config.max_context_persons);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
