//! Startup configuration read from the process environment

use crate::model::{DEFAULT_BASE_URL, MODEL_ID, TEMPERATURE};
use std::path::PathBuf;
use thiserror::Error;

/// Primary credential variable
pub const API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Older name, still honoured when the primary one is unset
pub const LEGACY_API_KEY_VAR: &str = "VITE_MISTRAL_API_KEY";

/// Overrides the API host, e.g. to point at a local proxy
pub const BASE_URL_VAR: &str = "TRANSLATE_AI_API_URL";

const APP_DIR: &str = "translate-ai";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got `{value}`")]
    InvalidBaseUrl { var: &'static str, value: String },

    #[error("could not determine the per-user {0} directory")]
    NoUserDir(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absent credentials are not fatal; every call will fail instead
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: MODEL_ID.to_string(),
            temperature: TEMPERATURE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).or_else(|| non_blank(LEGACY_API_KEY_VAR));

        let base_url = match non_blank(BASE_URL_VAR) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some(url) => {
                return Err(ConfigError::InvalidBaseUrl {
                    var: BASE_URL_VAR,
                    value: url,
                })
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Config {
            api_key,
            base_url,
            ..Config::default()
        })
    }
}

/// Directory holding the persisted theme preference
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoUserDir("config"))
}

/// Directory for the rolling diagnostic log
pub fn log_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join("logs"))
        .ok_or(ConfigError::NoUserDir("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model, "mistral-large-latest");
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn primary_key_wins_over_legacy() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "primary"),
            (LEGACY_API_KEY_VAR, "legacy"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn blank_primary_falls_back_to_legacy() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "   "),
            (LEGACY_API_KEY_VAR, "legacy"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn base_url_must_be_http() {
        let err = Config::from_lookup(lookup_from(&[(BASE_URL_VAR, "ftp://example.com")]));
        assert!(matches!(err, Err(ConfigError::InvalidBaseUrl { .. })));

        let config =
            Config::from_lookup(lookup_from(&[(BASE_URL_VAR, "http://127.0.0.1:8080")])).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
