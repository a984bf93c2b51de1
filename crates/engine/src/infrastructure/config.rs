//! Engine configuration read from the environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::infrastructure::spell_api::{DEFAULT_SPELL_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Where the catalog comes from. Picked once; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// Aggregated from the remote provider
    #[default]
    Live,
    /// Read from the bundled JSON dataset
    Bundled,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSource::Live => "live",
            CatalogSource::Bundled => "bundled",
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "api" => Ok(CatalogSource::Live),
            "bundled" | "static" => Ok(CatalogSource::Bundled),
            other => Err(ConfigError::UnknownSource(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown CATALOG_SOURCE: {0} (expected live or bundled)")]
    UnknownSource(String),
    #[error("Invalid SPELL_API_BASE_URL {value}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime settings for the engine binary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub api_base_url: Url,
    pub source: CatalogSource,
    pub bundled_data_path: PathBuf,
    pub request_timeout_secs: u64,
    pub preload: bool,
    pub server_host: String,
    pub server_port: u16,
    /// `None` disables CORS
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = lookup("SPELL_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SPELL_API_BASE_URL.to_string());
        let api_base_url = Url::parse(base.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base.clone(),
            source,
        })?;

        let source = match lookup("CATALOG_SOURCE") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => CatalogSource::default(),
        };

        let server_port = lookup("SERVER_PORT").or_else(|| lookup("PORT"));

        Ok(Self {
            api_base_url,
            source,
            bundled_data_path: lookup("BUNDLED_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            request_timeout_secs: parse_or(
                "SPELL_API_TIMEOUT_SECS",
                lookup("SPELL_API_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            ),
            preload: parse_or("PRELOAD_CATALOG", lookup("PRELOAD_CATALOG"), true),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: parse_or("SERVER_PORT", server_port, 3000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").filter(|v| !v.trim().is_empty()),
        })
    }

    /// Asset base: the provider base without a trailing slash.
    pub fn asset_base(&self) -> &str {
        self.api_base_url.as_str().trim_end_matches('/')
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "Invalid value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.asset_base(), DEFAULT_SPELL_API_BASE_URL);
        assert_eq!(config.source, CatalogSource::Live);
        assert_eq!(config.bundled_data_path, PathBuf::from("data"));
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.preload);
        assert_eq!(config.server_port, 3000);
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("SPELL_API_BASE_URL", "http://localhost:9000/v2/"),
            ("CATALOG_SOURCE", "Bundled"),
            ("PORT", "8080"),
            ("PRELOAD_CATALOG", "false"),
            ("CORS_ALLOWED_ORIGINS", "*"),
        ])
        .unwrap();

        assert_eq!(config.asset_base(), "http://localhost:9000/v2");
        assert_eq!(config.source, CatalogSource::Bundled);
        assert_eq!(config.server_port, 8080);
        assert!(!config.preload);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn server_port_wins_over_port() {
        let config = config(&[("SERVER_PORT", "4000"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = config(&[("SERVER_PORT", "lots"), ("SPELL_API_TIMEOUT_SECS", "-1")]).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn unknown_source_is_an_error() {
        assert!(matches!(
            config(&[("CATALOG_SOURCE", "carrier-pigeon")]),
            Err(ConfigError::UnknownSource(_))
        ));
        assert!(matches!(
            config(&[("SPELL_API_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
