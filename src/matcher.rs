//! Reconciles the model's free-text answer against the canonical records.
//!
//! The model is instructed to answer with bare full names, one per line.
//! Each non-empty answer line becomes a candidate; a record is kept when any
//! candidate is a substring of its normalized full name. Matching the
//! candidate against the whole full name (not token-by-token) keeps short
//! common tokens from over-matching, while substring containment tolerates
//! minor phrasing variance.
//!
//! Known gap: an answer line holding only a first name shared by several
//! records matches all of them. The directory carries no disambiguating
//! instruction for that case, so the behavior is kept rather than guessed
//! around.

use crate::models::Person;

/// Collapses a name for comparison: lowercased, internal whitespace folded
/// to single spaces, outer whitespace dropped.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filters `persons` down to those whose full name the answer references.
/// Returns an empty list for an absent or empty answer; result order follows
/// the input record order, not the order names appear in the answer.
pub fn match_persons(persons: &[Person], answer: Option<&str>) -> Vec<Person> {
    let Some(answer) = answer else {
        return Vec::new();
    };

    let candidates: Vec<String> = answer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_name)
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    persons
        .iter()
        .filter(|person| {
            let full_name = normalize_name(&person.full_name());
            candidates
                .iter()
                .any(|candidate| full_name.contains(candidate.as_str()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, second: &str, last: &str) -> Person {
        Person {
            first_name: first.to_string(),
            second_name: second.to_string(),
            last_names: last.to_string(),
            birth_date: String::new(),
            gender: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            email: String::new(),
            photo: None,
        }
    }

    #[test]
    fn none_and_empty_answers_match_nothing() {
        let persons = vec![person("Diana", "Marcela", "Ortiz Herrera")];
        assert!(match_persons(&persons, None).is_empty());
        assert!(match_persons(&persons, Some("")).is_empty());
        assert!(match_persons(&persons, Some("   \n  ")).is_empty());
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let persons = vec![person("Diana", "Marcela", "Ortiz Herrera")];
        let matched = match_persons(&persons, Some("  diana   marcela ortiz herrera  "));
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn result_preserves_record_order() {
        let persons = vec![
            person("Diana", "Marcela", "Ortiz Herrera"),
            person("Julián", "Andrés", "Moreno Díaz"),
        ];
        let answer = "Julián Andrés Moreno Díaz\nDiana Marcela Ortiz Herrera";
        let matched = match_persons(&persons, Some(answer));
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].first_name, "Diana");
        assert_eq!(matched[1].first_name, "Julián");
    }

    #[test]
    fn shared_first_name_line_matches_every_holder() {
        // Documents the known collision gap rather than hiding it.
        let persons = vec![
            person("Diana", "Marcela", "Ortiz Herrera"),
            person("Diana", "", "Cortés Ramírez"),
        ];
        let matched = match_persons(&persons, Some("diana"));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn unrelated_answer_matches_nothing() {
        let persons = vec![person("Diana", "Marcela", "Ortiz Herrera")];
        assert!(match_persons(&persons, Some("No encontrado en la base de datos")).is_empty());
    }
}
