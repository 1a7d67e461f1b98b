//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::core::errors::{DeeplError, Result};

/// Base URL of the free API plan
pub const FREE_API_URL: &str = "https://api-free.deepl.com/v2";

/// Base URL of the paid API plan
pub const PRO_API_URL: &str = "https://api.deepl.com/v2";

const DEFAULT_TIMEOUT_MS: i64 = 30000;

/// DeepL subscription plan; selects the API host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiPlan {
    #[default]
    Free,
    Pro,
}

impl fmt::Display for ApiPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiPlan::Free => write!(f, "free"),
            ApiPlan::Pro => write!(f, "pro"),
        }
    }
}

/// Configuration for the DeepL client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeeplConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_plan: ApiPlan,
    /// Overrides the plan's base URL when set
    #[serde(default)]
    pub api_endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for DeeplConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_plan: ApiPlan::Free,
            api_endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS as u64,
        }
    }
}

impl DeeplConfig {
    /// Load configuration from defaults, an optional file, then `DEEPL_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_plan", ApiPlan::Free.to_string())?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS)?;

        if let Some(path) = path {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix("DEEPL"))
            .build()?
            .try_deserialize()?;

        debug!("Using {} plan, timeout {}ms", config.api_plan, config.timeout_ms);
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(DeeplError::ConfigError {
                message: "API key is required (set DEEPL_API_KEY)".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(DeeplError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if matches!(&self.api_endpoint, Some(endpoint) if endpoint.trim().is_empty()) {
            return Err(DeeplError::ConfigError {
                message: "api_endpoint must not be empty when set".to_string(),
            });
        }

        Ok(())
    }

    /// API base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        match &self.api_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/'),
            None => match self.api_plan {
                ApiPlan::Free => FREE_API_URL,
                ApiPlan::Pro => PRO_API_URL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_validation() {
        let config = DeeplConfig::default().with_api_key("test_key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_key() {
        let config = DeeplConfig::default();
        assert!(matches!(config.validate(), Err(DeeplError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = DeeplConfig {
            timeout_ms: 0,
            ..DeeplConfig::default().with_api_key("test_key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_by_plan() {
        let mut config = DeeplConfig::default();
        assert_eq!(config.base_url(), FREE_API_URL);

        config.api_plan = ApiPlan::Pro;
        assert_eq!(config.base_url(), PRO_API_URL);

        config.api_endpoint = Some("http://127.0.0.1:8080/v2/".to_string());
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/v2");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{ "api_key": "file_key", "api_plan": "pro", "timeout_ms": 5000 }}"#
        )
        .unwrap();

        let config = DeeplConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key, "file_key");
        assert_eq!(config.api_plan, ApiPlan::Pro);
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.api_endpoint, None);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(DeeplConfig::load(Some(&missing)).is_err());
    }
}
