//! Demo configuration, read from the environment.

use crate::error::AppError;

/// Tracker identity and the page the demo screen reports as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Tracker namespace (`SNOWPLOW_NAMESPACE`).
    pub namespace: String,
    /// Application id (`SNOWPLOW_APP_ID`).
    pub app_id: String,
    /// Page code of the demo screen (`SNOWPLOW_PAGE_CODE`).
    pub page_code: String,
}

impl DemoConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but empty.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, applying defaults for unset
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a key is present but empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let read = |key: &str, default: &str| -> Result<String, AppError> {
            match lookup(key) {
                None => Ok(default.to_owned()),
                Some(value) if value.trim().is_empty() => {
                    Err(AppError::Config(format!("{key} must not be empty")))
                }
                Some(value) => Ok(value),
            }
        };

        Ok(Self {
            namespace: read("SNOWPLOW_NAMESPACE", "namespace")?,
            app_id: read("SNOWPLOW_APP_ID", "appId")?,
            page_code: read("SNOWPLOW_PAGE_CODE", "Main")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.namespace, "namespace");
        assert_eq!(config.app_id, "appId");
        assert_eq!(config.page_code, "Main");
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let env = HashMap::from([
            ("SNOWPLOW_APP_ID", "shop"),
            ("SNOWPLOW_PAGE_CODE", "Detail"),
        ]);

        let config =
            DemoConfig::from_lookup(|key| env.get(key).map(|value| (*value).to_owned())).unwrap();

        assert_eq!(config.app_id, "shop");
        assert_eq!(config.page_code, "Detail");
        assert_eq!(config.namespace, "namespace");
    }

    #[test]
    fn test_empty_value_is_a_config_error() {
        let result = DemoConfig::from_lookup(|key| {
            (key == "SNOWPLOW_NAMESPACE").then(|| "  ".to_owned())
        });

        match result {
            Err(AppError::Config(message)) => assert!(message.contains("SNOWPLOW_NAMESPACE")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
