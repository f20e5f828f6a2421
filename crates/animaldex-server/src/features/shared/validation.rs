//! Shared validation utilities
//!
//! Provides common validation functions for input data across commands and queries.
//!
//! # Examples
//!
//! ```rust,ignore
//! use animaldex_server::features::shared::validation::{search_pattern, validate_required_text};
//!
//! validate_required_text("name", &command.name, 200)?;
//!
//! // `None` for absent or blank input, otherwise an escaped ILIKE pattern
//! let pattern = search_pattern(query.search.as_deref());
//! ```

use thiserror::Error;

/// Errors raised by required text fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be at most {max_length} characters")]
    TooLong { field: &'static str, max_length: usize },
}

/// Require a non-blank value no longer than `max_length` characters
pub fn validate_required_text(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), TextValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextValidationError::Required { field });
    }

    if trimmed.chars().count() > max_length {
        return Err(TextValidationError::TooLong { field, max_length });
    }

    Ok(())
}

/// Escape `\`, `%` and `_` so user input matches literally under LIKE
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Turn a raw `search` parameter into a substring pattern for ILIKE
///
/// Absent and whitespace-only input both mean "no search". Otherwise the
/// input is matched as given, surrounding whitespace included.
pub fn search_pattern(search: Option<&str>) -> Option<String> {
    search
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("%{}%", escape_like(s)))
}

/// Strength of an ecosystem interaction, inclusive
pub const MIN_STRENGTH: i32 = 1;
pub const MAX_STRENGTH: i32 = 5;

pub fn is_valid_strength(strength: i32) -> bool {
    (MIN_STRENGTH..=MAX_STRENGTH).contains(&strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("name", "Arctic Fox", 200).is_ok());
        assert_eq!(
            validate_required_text("name", "", 200),
            Err(TextValidationError::Required { field: "name" })
        );
        assert_eq!(
            validate_required_text("name", "   ", 200),
            Err(TextValidationError::Required { field: "name" })
        );
        assert_eq!(
            validate_required_text("name", &"a".repeat(201), 200),
            Err(TextValidationError::TooLong { field: "name", max_length: 200 })
        );
    }

    #[test]
    fn test_required_text_message_names_field() {
        let err = validate_required_text("scientific_name", " ", 10).unwrap_err();
        assert_eq!(err.to_string(), "scientific_name is required and cannot be empty");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("fox"), "fox");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\x"), "c:\\\\x");
    }

    #[test]
    fn test_search_pattern() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("")), None);
        assert_eq!(search_pattern(Some("   ")), None);
        assert_eq!(search_pattern(Some("fox")), Some("%fox%".to_string()));
        assert_eq!(search_pattern(Some(" fox")), Some("% fox%".to_string()));
        assert_eq!(search_pattern(Some(" fox ")), Some("% fox %".to_string()));
        assert_eq!(search_pattern(Some("%")), Some("%\\%%".to_string()));
    }

    #[test]
    fn test_strength_bounds() {
        assert!(!is_valid_strength(0));
        assert!(is_valid_strength(1));
        assert!(is_valid_strength(5));
        assert!(!is_valid_strength(6));
    }
}
