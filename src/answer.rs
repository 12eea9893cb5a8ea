//! Isolates the user-facing answer from raw model output.

use regex::Regex;
use std::sync::LazyLock;

// Reasoning models (DeepSeek-R1 and similar) interleave chain-of-thought
// markup with the answer. Non-greedy across newlines; an unmatched opening
// or closing tag is left in place.
static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").unwrap());

/// Removes every `<think>...</think>` block and trims the remainder.
pub fn extract_final_answer(text: &str) -> String {
    THINK_BLOCK.replace_all(text, "").trim().to_string()
}
