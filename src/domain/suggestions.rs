//! Validation of suggestion generator replies.

use serde_json::Value;

/// Outcome of validating a generator reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionValidation {
    /// Trimmed, non-blank suggestions in reply order.
    Valid(Vec<String>),
    Invalid(String),
}

/// Validate a raw reply: it must be a JSON array of strings.
///
/// Entries are trimmed and blank ones dropped. A reply left with no entries
/// is invalid.
pub fn validate_suggestions(raw: &str) -> SuggestionValidation {
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(err) => return SuggestionValidation::Invalid(format!("not JSON: {}", err)),
    };

    let Value::Array(items) = value else {
        return SuggestionValidation::Invalid(format!("expected an array, got {}", kind(&value)));
    };

    let mut suggestions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::String(text) = item else {
            return SuggestionValidation::Invalid(format!(
                "element {} is {}, not a string",
                index,
                kind(item)
            ));
        };
        let text = text.trim();
        if !text.is_empty() {
            suggestions.push(text.to_string());
        }
    }

    if suggestions.is_empty() {
        return SuggestionValidation::Invalid("no usable suggestions".to_string());
    }

    SuggestionValidation::Valid(suggestions)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_array_of_strings() {
        let result = validate_suggestions(r#"["Eldritch glow", " Golden hour haze "]"#);
        assert_eq!(
            result,
            SuggestionValidation::Valid(vec!["Eldritch glow".into(), "Golden hour haze".into()])
        );
    }

    #[test]
    fn accepts_any_positive_count() {
        let result = validate_suggestions(r#"["one"]"#);
        assert!(matches!(result, SuggestionValidation::Valid(v) if v.len() == 1));
    }

    #[test]
    fn rejects_non_array() {
        let result = validate_suggestions(r#"{"values": ["a"]}"#);
        assert_eq!(
            result,
            SuggestionValidation::Invalid("expected an array, got an object".into())
        );
    }

    #[test]
    fn rejects_non_string_elements() {
        let result = validate_suggestions(r#"["a", 3]"#);
        assert_eq!(
            result,
            SuggestionValidation::Invalid("element 1 is a number, not a string".into())
        );
    }

    #[test]
    fn rejects_garbage_and_empty_replies() {
        assert!(matches!(validate_suggestions("not json"), SuggestionValidation::Invalid(_)));
        assert!(matches!(validate_suggestions("[]"), SuggestionValidation::Invalid(_)));
        assert!(matches!(validate_suggestions(r#"["  ", ""]"#), SuggestionValidation::Invalid(_)));
    }
}
