//! Helpers for reading typed values out of environment variables

use std::str::FromStr;

use crate::error::CommonError;

/// Parse a boolean flag as written in `.env` files and deployment manifests.
///
/// Accepts `1/0`, `true/false`, `yes/no` and `on/off`, case-insensitively.
pub fn parse_bool(name: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CommonError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Read `name` and parse it, falling back to `default` when unset.
///
/// A set but unparseable value is an error rather than a silent default.
pub fn var_or<T: FromStr>(name: &str, default: T) -> crate::Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| CommonError::InvalidEnvValue {
            name: name.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// Boolean counterpart of [`var_or`]
pub fn bool_var_or(name: &str, default: bool) -> crate::Result<bool> {
    match std::env::var(name) {
        Ok(raw) => parse_bool(name, &raw),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "yes").unwrap());
        assert!(parse_bool("X", " TRUE ").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(CommonError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_var_or_unset_uses_default() {
        assert_eq!(var_or("ANIMALDEX_TEST_SURELY_UNSET_U16", 8000u16).unwrap(), 8000);
        assert!(bool_var_or("ANIMALDEX_TEST_SURELY_UNSET_BOOL", true).unwrap());
    }
}
