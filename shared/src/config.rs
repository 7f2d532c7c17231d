//! Site tuning knobs.
//!
//! Every field has a default; an override document only needs the keys it
//! changes:
//!
//! ```json
//! { "header_offset": 120, "donate_delay_ms": 800 }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Height of the fixed nav bar, subtracted from anchor scroll targets
    pub header_offset: f64,
    /// Vertical offset past which the nav bar switches to its solid style
    pub scrolled_threshold: f64,
    /// Number of animals previewed on the home layout
    pub home_preview_limit: usize,
    /// Simulated latency of the adoption form
    pub adopt_delay_ms: u32,
    /// Simulated latency of the donation form
    pub donate_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            scrolled_threshold: 50.0,
            home_preview_limit: 3,
            adopt_delay_ms: 1000,
            donate_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(String),
    #[error("home_preview_limit must be at least 1")]
    EmptyPreview,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_preview_limit == 0 {
            return Err(ConfigError::EmptyPreview);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset, 100.0);
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.home_preview_limit, 3);
        assert_eq!(config.adopt_delay_ms, 1000);
        assert_eq!(config.donate_delay_ms, 1500);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "header_offset": 120 }"#).unwrap();
        assert_eq!(config.header_offset, 120.0);
        assert_eq!(config.home_preview_limit, 3);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys_and_zero_preview() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "header_ofset": 1 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            SiteConfig::from_json(r#"{ "home_preview_limit": 0 }"#),
            Err(ConfigError::EmptyPreview)
        );
    }
}
