//! Renders canonical person records into the textual context block that is
//! sent to the completion endpoint alongside the query.

use crate::models::Person;

/// Fixed context handed to the model when the directory holds no records,
/// so the completion step still receives meaningful input.
pub const NO_PERSONS_SENTINEL: &str = "No hay personas registradas en el sistema.";

/// Hard character bound applied to the rendered context before prompting.
pub const MAX_CONTEXT_CHARS: usize = 5000;

/// Serializes the records into one labelled, pipe-delimited line each, in
/// input order. The caller bounds the record count beforehand; this function
/// never truncates.
pub fn render_context(persons: &[Person]) -> String {
    if persons.is_empty() {
        return NO_PERSONS_SENTINEL.to_string();
    }

    persons
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(person: &Person) -> String {
    format!(
        "Nombre: {} | Fecha de nacimiento: {} | Género: {} | Correo: {} | Documento: {} {} | Foto: {}",
        person.full_name(),
        person.birth_date,
        person.gender,
        person.email,
        person.document_type,
        person.document_number,
        person.photo.as_deref().unwrap_or("Sin foto"),
    )
}

/// Clamps an overlong context to `max_chars` characters, marking the cut.
pub fn trim_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}...[truncated]", &text[..byte_index]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str) -> Person {
        Person {
            first_name: first.to_string(),
            second_name: String::new(),
            last_names: last.to_string(),
            birth_date: "1990-05-15".to_string(),
            gender: "Female".to_string(),
            document_type: "Citizen ID".to_string(),
            document_number: "123456789".to_string(),
            email: "test@example.com".to_string(),
            photo: None,
        }
    }

    #[test]
    fn empty_input_yields_sentinel() {
        assert_eq!(render_context(&[]), NO_PERSONS_SENTINEL);
    }

    #[test]
    fn one_line_per_record_in_input_order() {
        let persons = vec![person("Diana", "Ortiz"), person("Maria", "Garcia")];
        let context = render_context(&persons);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Diana Ortiz"));
        assert!(lines[1].contains("Maria Garcia"));
    }

    #[test]
    fn absent_photo_renders_placeholder() {
        let context = render_context(&[person("Diana", "Ortiz")]);
        assert!(context.contains("Foto: Sin foto"));
    }

    #[test]
    fn trim_text_clamps_and_marks_truncation() {
        let long = "x".repeat(60);
        let trimmed = trim_text(&long, 50);
        assert!(trimmed.ends_with("...[truncated]"));
        assert!(trimmed.starts_with(&"x".repeat(50)));
    }

    #[test]
    fn trim_text_leaves_short_text_unchanged() {
        assert_eq!(trim_text("corto", 50), "corto");
    }

    #[test]
    fn trim_text_respects_multibyte_boundaries() {
        let accented = "é".repeat(10);
        assert_eq!(trim_text(&accented, 4), format!("{}...[truncated]", "é".repeat(4)));
    }
}
