//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

/// `${VAR}` references without a default.
static REQUIRED_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var regex")
});

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    if let Some(missing) = REQUIRED_VAR
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .find(|var| std::env::var(var.as_str()).is_err())
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", missing.as_str()),
        });
    }

    let expanded = shellexpand::env_with_context_no_errors(value, |var| std::env::var(var).ok());
    Ok(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test uses a variable name no other test touches
        unsafe {
            std::env::set_var("MDOCS_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${MDOCS_TEST_VAR_SIMPLE}/docs", "test.field").unwrap();
        assert_eq!(result, "hello/docs");
        unsafe {
            std::env::remove_var("MDOCS_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_value() {
        // SAFETY: test uses a variable name no other test touches
        unsafe {
            std::env::set_var("MDOCS_TEST_VAR_DEFAULT", "hello");
        }
        let result = expand_env("${MDOCS_TEST_VAR_DEFAULT:-world}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("MDOCS_TEST_VAR_DEFAULT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test uses a variable name no other test touches
        unsafe {
            std::env::remove_var("MDOCS_UNSET_VAR_TEST");
        }
        let result = expand_env("${MDOCS_UNSET_VAR_TEST:-default}", "test.field").unwrap();
        assert_eq!(result, "default");
    }

    #[test]
    fn test_expand_unset_var_errors() {
        // SAFETY: test uses a variable name no other test touches
        unsafe {
            std::env::remove_var("MDOCS_MISSING_VAR_TEST");
        }
        let err = expand_env("${MDOCS_MISSING_VAR_TEST}", "sets.path").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable error in sets.path: ${MDOCS_MISSING_VAR_TEST} not set"
        );
    }

    #[test]
    fn test_no_expansion_needed() {
        let result = expand_env("plain/path", "test.field").unwrap();
        assert_eq!(result, "plain/path");
    }
}
