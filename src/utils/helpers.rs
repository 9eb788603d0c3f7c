//! Helper functions and utilities
//!
//! This module contains helpers shared by the command-line host.

use serde_json::Value;
use crate::i18n::TranslationParams;
use crate::utils::errors::{PhrasebookError, Result};

/// Parse a single `name=value` assignment
///
/// The value is read as JSON when it parses (numbers, booleans, objects) and
/// kept as a plain string otherwise.
pub fn parse_assignment(text: &str) -> Result<(String, Value)> {
    let (name, raw) = text.split_once('=').ok_or_else(|| {
        PhrasebookError::InvalidInput(format!("Expected NAME=VALUE, got '{}'", text))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PhrasebookError::InvalidInput(format!(
            "Variable name is empty in '{}'",
            text
        )));
    }

    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}

/// Parse a list of `name=value` assignments into translation parameters
pub fn parse_params(assignments: &[String]) -> Result<TranslationParams> {
    let mut params = TranslationParams::new();

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        params.insert(name, value);
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_parse_plain_string() {
        let (name, value) = parse_assignment("name=World").unwrap();
        assert_eq!(name, "name");
        assert_eq!(value, json!("World"));
    }

    #[test]
    fn test_parse_json_values() {
        assert_eq!(parse_assignment("count=5").unwrap().1, json!(5));
        assert_eq!(parse_assignment("ok=true").unwrap().1, json!(true));
        assert_eq!(
            parse_assignment(r#"user={"name":"Ann"}"#).unwrap().1,
            json!({"name": "Ann"})
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let (_, value) = parse_assignment("expr=a=b").unwrap();
        assert_eq!(value, json!("a=b"));
    }

    #[test]
    fn test_invalid_assignments() {
        assert_matches!(parse_assignment("novalue"), Err(PhrasebookError::InvalidInput(_)));
        assert_matches!(parse_assignment("=x"), Err(PhrasebookError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["name=Ann".to_string(), "count=3".to_string()]).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("count"), Some(&json!(3)));
    }
}
