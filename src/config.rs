//! App Configuration
//!
//! Read from an optional `<script id="riego-config" type="application/json">`
//! block in `index.html`. Missing keys take their defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::calendar::{Locale, ReferenceMode};
use crate::error::ConfigError;

/// Element id holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "riego-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub reference: ReferenceMode,
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            reference: ReferenceMode::default(),
            seed_demo_data: true,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Config embedded in the page, `Ok(None)` when there is none
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ConfigError::MissingDocument)?;
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let json = element.text_content().unwrap_or_default();
        if json.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&json).map(Some)
    }

    /// Page config or defaults. The error, if any, is returned for logging
    /// once the logger is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_document() {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_json(
            r#"{
                "locale": "en",
                "reference": {"mode": "pinned", "year": 2025, "month": 1},
                "seed_demo_data": false,
                "log_level": "debug",
                "log_capacity": 16
            }"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.reference, ReferenceMode::LEGACY);
        assert!(!config.seed_demo_data);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.log_capacity, 16);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(AppConfig::from_json("{locale"), Err(ConfigError::Json(_))));
    }
}
