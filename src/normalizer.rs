//! Maps heterogeneous directory records into the canonical [`Person`] shape.
//!
//! The directory has shipped two naming conventions for the same logical
//! fields over time (`primer_nombre` vs `firstName`, ...). Each canonical
//! field declares its candidate source keys in priority order; the first
//! non-empty value wins. Normalization never fails: a malformed record
//! degrades field-by-field to empty strings instead of aborting the batch.

use crate::models::Person;
use serde_json::Value;

const FIRST_NAME_KEYS: &[&str] = &["primer_nombre", "firstName"];
const SECOND_NAME_KEYS: &[&str] = &["segundo_nombre", "secondName"];
const LAST_NAMES_KEYS: &[&str] = &["apellidos", "lastNames"];
const BIRTH_DATE_KEYS: &[&str] = &["fecha_nacimiento", "birthDate"];
const GENDER_KEYS: &[&str] = &["genero", "gender"];
const DOCUMENT_TYPE_KEYS: &[&str] = &["tipo_documento", "documentType"];
const DOCUMENT_NUMBER_KEYS: &[&str] = &["nro_documento", "documentNumber", "nroDocumento"];
const EMAIL_KEYS: &[&str] = &["correo", "email"];
const PHOTO_KEYS: &[&str] = &["foto", "photoUrl", "photo"];

/// Builds a canonical [`Person`] from one raw directory record.
pub fn normalize_person(source: &Value) -> Person {
    Person {
        first_name: pick_string(source, FIRST_NAME_KEYS),
        second_name: pick_string(source, SECOND_NAME_KEYS),
        last_names: pick_string(source, LAST_NAMES_KEYS),
        birth_date: pick_string(source, BIRTH_DATE_KEYS),
        gender: pick_string(source, GENDER_KEYS),
        document_type: pick_string(source, DOCUMENT_TYPE_KEYS),
        document_number: pick_string(source, DOCUMENT_NUMBER_KEYS),
        email: pick_string(source, EMAIL_KEYS),
        photo: pick_optional(source, PHOTO_KEYS),
    }
}

/// First non-empty candidate value, trimmed. Numbers and booleans are
/// stringified; anything else counts as absent.
fn pick_string(source: &Value, keys: &[&str]) -> String {
    pick_optional(source, keys).unwrap_or_default()
}

/// Like [`pick_string`] but keeps "absent" as `None`.
fn pick_optional(source: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| source.get(*key))
        .find_map(as_trimmed_string)
}

fn as_trimmed_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_convention_wins_over_fallback() {
        let source = json!({
            "primer_nombre": "Diana",
            "firstName": "NotDiana",
        });
        assert_eq!(normalize_person(&source).first_name, "Diana");
    }

    #[test]
    fn empty_primary_falls_through_to_fallback() {
        let source = json!({
            "primer_nombre": "   ",
            "firstName": "Diana",
        });
        assert_eq!(normalize_person(&source).first_name, "Diana");
    }

    #[test]
    fn document_number_accepts_third_alternative() {
        let source = json!({ "nroDocumento": 123456789 });
        assert_eq!(normalize_person(&source).document_number, "123456789");
    }

    #[test]
    fn missing_fields_become_empty_strings_not_null() {
        let person = normalize_person(&json!({}));
        assert_eq!(person.first_name, "");
        assert_eq!(person.email, "");
        assert_eq!(person.photo, None);
    }

    #[test]
    fn non_object_input_degrades_to_empty_record() {
        let person = normalize_person(&json!("not an object"));
        assert_eq!(person.first_name, "");
        assert_eq!(person.photo, None);
    }

    #[test]
    fn values_are_trimmed() {
        let source = json!({ "firstName": "  Diana  " });
        assert_eq!(normalize_person(&source).first_name, "Diana");
    }
}
