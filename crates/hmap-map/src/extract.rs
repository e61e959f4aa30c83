//! JSON span extraction from free-form oracle text.

use crate::error::ReconcileError;

/// Extracts the outermost `{...}` span from free-form text.
///
/// The span runs from the first `{` to the last `}` in the text, so
/// explanatory prose or markdown fences around the object are tolerated.
///
/// # Errors
///
/// Returns [`ReconcileError::Extraction`] when no such span exists.
pub fn extract_json_object(raw: &str) -> Result<&str, ReconcileError> {
    let start = raw.find('{').ok_or(ReconcileError::Extraction)?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(ReconcileError::Extraction)?;
    Ok(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_object() {
        assert_eq!(extract_json_object(r#"{"a":"b"}"#).unwrap(), r#"{"a":"b"}"#);
    }

    #[test]
    fn extracts_object_with_surrounding_prose() {
        let raw = "Here is the mapping:\n```json\n{\"a\": \"b\"}\n```\nDone.";
        assert_eq!(extract_json_object(raw).unwrap(), "{\"a\": \"b\"}");
    }

    #[test]
    fn greedy_span_covers_nested_braces() {
        let raw = r#"x {"a":"b"} y {"c":"d"} z"#;
        assert_eq!(extract_json_object(raw).unwrap(), r#"{"a":"b"} y {"c":"d"}"#);
    }

    #[test]
    fn fails_without_braces() {
        assert_eq!(
            extract_json_object("no json here"),
            Err(ReconcileError::Extraction)
        );
    }

    #[test]
    fn fails_when_close_precedes_open() {
        assert_eq!(extract_json_object("} {"), Err(ReconcileError::Extraction));
    }
}
