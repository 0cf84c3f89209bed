//! Application environment marker.
//!
//! Read once when the document is ready and handed to whatever needs it,
//! instead of living on a mutable global.

use serde::{Deserialize, Serialize};

/// Environment used when the page does not name one.
pub const DEFAULT_ENV: &str = "prod";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEnvironment {
    pub env: String,
}

impl Default for AppEnvironment {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
        }
    }
}

impl AppEnvironment {
    /// Build from the body `data-env` attribute; absent or empty means `prod`.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(env) if !env.is_empty() => Self {
                env: env.to_string(),
            },
            _ => Self::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == DEFAULT_ENV
    }
}

impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_defaults_to_prod() {
        assert_eq!(AppEnvironment::from_attribute(None).env, "prod");
    }

    #[test]
    fn test_empty_attribute_defaults_to_prod() {
        let env = AppEnvironment::from_attribute(Some(""));
        assert!(env.is_production());
    }

    #[test]
    fn test_attribute_taken_verbatim() {
        let env = AppEnvironment::from_attribute(Some("staging"));
        assert_eq!(env.env, "staging");
        assert!(!env.is_production());
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            serde_json::json!({ "env": "staging" })
        );
    }
}
