use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical person record, independent of the directory service's field
/// naming. Every field except `photo` is always present: missing source
/// values become the empty string during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub second_name: String,
    pub last_names: String,
    pub birth_date: String,
    pub gender: String,
    pub document_type: String,
    pub document_number: String,
    pub email: String,
    pub photo: Option<String>,
}

impl Person {
    /// Full name as the model is instructed to answer with: first, second
    /// and last names single-space joined, empty components skipped.
    pub fn full_name(&self) -> String {
        let joined = format!(
            "{} {} {}",
            self.first_name, self.second_name, self.last_names
        );
        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Outcome of one completion call. `answer` is `None` whenever the provider
/// call failed or the endpoint is not configured; `raw` carries the full
/// provider payload for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResult {
    pub answer: Option<String>,
    pub raw: Option<Value>,
    pub error: Option<String>,
}

impl CompletionResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            answer: None,
            raw: None,
            error: Some(error.into()),
        }
    }
}

/// Request body for the RAG endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryBody {
    pub consulta: String,
}

/// Response of the debugging endpoint: matched persons plus the model's
/// answer and raw provider payload.
#[derive(Debug, Clone, Serialize)]
pub struct RagDebugResponse {
    pub personas: Vec<Person>,
    pub answer: Option<String>,
    pub raw: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_single_spaces() {
        let person = Person {
            first_name: "Diana".to_string(),
            second_name: "Marcela".to_string(),
            last_names: "Ortiz Herrera".to_string(),
            birth_date: String::new(),
            gender: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            email: String::new(),
            photo: None,
        };
        assert_eq!(person.full_name(), "Diana Marcela Ortiz Herrera");
    }

    #[test]
    fn full_name_skips_empty_components() {
        let person = Person {
            first_name: "Maria".to_string(),
            second_name: String::new(),
            last_names: "Garcia Lopez".to_string(),
            birth_date: String::new(),
            gender: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            email: String::new(),
            photo: None,
        };
        assert_eq!(person.full_name(), "Maria Garcia Lopez");
    }
}
