use crate::answer::extract_final_answer;
use crate::errors::AppError;
use crate::models::CompletionResult;
use serde_json::{json, Value};
use std::time::Duration;

/// System instruction for the completion endpoint. Constrains answers to the
/// supplied context and asks for bare full names, one per line, whenever the
/// question concerns people.
const SYSTEM_PROMPT: &str = "Responde de manera breve y directa. \
No incluyas razonamiento interno, ni etiquetas <think>. \
Se te proporcionará un contexto que contiene una lista de personas con sus nombres, \
apellidos, fechas de nacimiento, documentos y correos.\n\
Tu tarea es responder ÚNICAMENTE usando la información del CONTEXTO.\n\
Si la respuesta está en el contexto, devuélvela EXACTAMENTE.\n\
Si no está en el contexto, responde: 'No encontrado en la base de datos'.\n\
Nunca definas palabras ni des explicaciones generales.\n\
Nunca inventes personas ni información adicional.\n\
Siempre responde de forma directa.\n\
Cuando se te hagan preguntas relacionadas con personas responde solo con los nombres \
completos de las personas, uno por línea, por ejemplo: Diana Marcela Ortiz Herrera\n\
Julián Andrés Moreno Díaz\nNatalia Andrea Cortés Ramírez";

const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f64 = 0.2;

/// Client for an OpenAI-chat-style completion endpoint.
///
/// The endpoint URL and credential are optional: when either is missing the
/// client reports "not configured" instead of attempting network I/O, and the
/// pipeline proceeds with no answer.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Sends the query plus context to the completion endpoint.
    ///
    /// Never fails: configuration gaps, transport errors and unparseable
    /// bodies all come back as a [`CompletionResult`] with `answer: None`
    /// and the cause in `error`. A response that is valid JSON but not an
    /// OpenAI chat envelope is stringified wholesale as the answer.
    pub async fn complete(&self, query: &str, context: &str) -> CompletionResult {
        let (Some(url), Some(key)) = (self.api_url.as_deref(), self.api_key.as_deref()) else {
            return CompletionResult::failure("LLM endpoint not configured");
        };

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!("Contexto:\n{}\n\nPregunta: {}", context, query),
                }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        tracing::info!("Calling completion endpoint (model {})", self.model);

        let response = match self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", key))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Completion request failed: {}", e);
                return CompletionResult::failure(e.to_string());
            }
        };

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to parse completion response: {}", e);
                return CompletionResult::failure(e.to_string());
            }
        };

        let answer = match data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
        {
            Some(content) => extract_final_answer(content),
            None => {
                tracing::warn!("Unexpected completion envelope, stringifying payload");
                data.to_string()
            }
        };

        tracing::debug!("Completion answer: {}", preview(&answer));

        CompletionResult {
            answer: Some(answer),
            raw: Some(data),
            error: None,
        }
    }
}

/// Bounded render of model output for logs.
fn preview(text: &str) -> String {
    crate::context::trim_text(text, 1000)
}
