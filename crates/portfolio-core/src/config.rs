//! Site configuration.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names:
//!
//! ```json
//! { "typing_words": ["Rust Developer"], "log_level": "debug" }
//! ```

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{PortfolioError, PortfolioResult};

/// Relative path of the certificate configuration resource.
pub const DEFAULT_CERTIFICATES_PATH: &str = "certificates/certificates-config.json";

/// Form relay that turns submissions into email.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub certificates_path: String,
    pub relay_endpoint: String,
    /// Words cycled by the typing animation
    pub typing_words: Vec<String>,
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            certificates_path: DEFAULT_CERTIFICATES_PATH.to_string(),
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            typing_words: [
                "Data Analyst",
                "Python Developer",
                "Web Developer",
                "Machine Learning Enthusiast",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json`](Self::from_json), falling back to defaults with a warning.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid portfolio config: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if self.certificates_path.trim().is_empty() {
            return Err(PortfolioError::Config("certificates_path is empty".into()));
        }
        if !self.relay_endpoint.starts_with("https://") && !self.relay_endpoint.starts_with("http://") {
            return Err(PortfolioError::Config(format!(
                "relay_endpoint must be an http(s) URL, got {:?}",
                self.relay_endpoint
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> PortfolioResult<Level> {
        self.log_level
            .parse()
            .map_err(|_| PortfolioError::Config(format!("unknown log level {:?}", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortfolioConfig::default();
        assert_eq!(config.certificates_path, "certificates/certificates-config.json");
        assert_eq!(config.typing_words.len(), 4);
        assert_eq!(config.level().unwrap(), Level::INFO);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_override() {
        let config = PortfolioConfig::from_json(r#"{"typing_words": ["Rust Developer"]}"#).unwrap();
        assert_eq!(config.typing_words, vec!["Rust Developer"]);
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn test_invalid_values() {
        assert!(PortfolioConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
        assert!(PortfolioConfig::from_json(r#"{"relay_endpoint": "ftp://x"}"#).is_err());
        assert!(PortfolioConfig::from_json(r#"{"certificates_path": " "}"#).is_err());
        assert!(PortfolioConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(PortfolioConfig::from_json_or_default("{"), PortfolioConfig::default());
    }
}
