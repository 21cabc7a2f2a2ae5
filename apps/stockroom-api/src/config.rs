//! API configuration
//!
//! Settings come from environment variables (optionally loaded from a `.env`
//! file by the binary). Every setting has a default except the API token.

use std::path::PathBuf;

use stockroom_domain::product::ValidationPolicy;
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JSON file the catalog is seeded from at startup
    pub seed_path: PathBuf,
    /// Token required on write endpoints
    pub api_token: Option<String>,
    /// Zero-value rules for product validation
    pub validation: ValidationPolicy,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_path: PathBuf::from("products.json"),
            api_token: None,
            validation: ValidationPolicy::default(),
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("STOCKROOM_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "STOCKROOM_PORT",
                value: raw,
                expected: "a port number",
            })?,
            None => defaults.port,
        };

        let log_format = match lookup("STOCKROOM_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "STOCKROOM_LOG_FORMAT",
                    value: other.to_string(),
                    expected: "text or json",
                })
            }
        };

        Ok(Self {
            host: lookup("STOCKROOM_HOST").unwrap_or(defaults.host),
            port,
            seed_path: lookup("STOCKROOM_SEED_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.seed_path),
            api_token: lookup("API_TOKEN").filter(|token| !token.is_empty()),
            validation: ValidationPolicy {
                allow_zero_quantity: flag(&lookup, "STOCKROOM_ALLOW_ZERO_QUANTITY")?,
                allow_zero_price: flag(&lookup, "STOCKROOM_ALLOW_ZERO_PRICE")?,
            },
            log_format,
        })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };

    match raw.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            expected: "true or false",
        }),
    }
}
