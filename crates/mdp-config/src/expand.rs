//! Environment variable and home directory expansion for config values.

use crate::ConfigError;

/// Expand `~`, `$VAR`, `${VAR}` and `${VAR:-default}` in a config value.
///
/// `field` names the config key for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("plain", "export.title").unwrap(), "plain");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDP_EXPAND_UNSET_TEST");
        }
        assert_eq!(
            expand_env("${MDP_EXPAND_UNSET_TEST:-fallback}", "export.lang").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_missing_var_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDP_EXPAND_MISSING_TEST");
        }
        let err = expand_env("${MDP_EXPAND_MISSING_TEST}", "export.output_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("export.output_dir"));
        assert!(err.to_string().contains("MDP_EXPAND_MISSING_TEST"));
    }
}
