//! Environment variable utilities
//!
//! # Usage
//!
//! ```ignore
//! use dc_error::env::{env_get, env_get_bool};
//!
//! let reporting = env_get_bool("DC_ERROR_REPORTING", false);
//! let level: u8 = env_get("DC_ERROR_LOG_LEVEL", 2);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other set value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// `Some(T)` if the variable is set and parses, `None` otherwise.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get("__DC_ERROR_UNSET_VAR__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool("__DC_ERROR_UNSET_VAR__", true));
        assert!(!env_get_bool("__DC_ERROR_UNSET_VAR__", false));
    }

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<i32> = env_get_opt("__DC_ERROR_UNSET_VAR__");
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_bool_variants() {
        for truthy in ["1", "true", "TRUE", "yes", "on"] {
            std::env::set_var("__DC_ERROR_TEST_BOOL__", truthy);
            assert!(env_get_bool("__DC_ERROR_TEST_BOOL__", false), "{}", truthy);
        }
        for falsy in ["0", "false", "garbage"] {
            std::env::set_var("__DC_ERROR_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__DC_ERROR_TEST_BOOL__", true), "{}", falsy);
        }
        std::env::remove_var("__DC_ERROR_TEST_BOOL__");
    }

    #[test]
    fn test_env_get_invalid_parse() {
        std::env::set_var("__DC_ERROR_TEST_INVALID__", "not_a_number");
        let val: i32 = env_get("__DC_ERROR_TEST_INVALID__", 99);
        assert_eq!(val, 99);
        std::env::remove_var("__DC_ERROR_TEST_INVALID__");
    }
}
