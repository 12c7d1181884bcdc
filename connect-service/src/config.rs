//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `CONNECT_`, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml (or the file given to [`Config::load_from`])
//! 3. Default values
//!
//! ```toml
//! [service]
//! name = "connect-service"
//! port = 8080
//! log_level = "debug"
//! log_format = "pretty"
//!
//! [middleware]
//! body_limit_mb = 10
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CONNECT_";

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log line encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Multi-line human readable output for local development
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Middleware configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB (also bounds multipart uploads)
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS mode: "permissive" or "restrictive"
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

const BYTES_PER_MB: usize = 1024 * 1024;

impl MiddlewareConfig {
    /// Body limit in bytes, saturating at `usize::MAX`
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_body_limit_mb() -> usize {
    10 // 10 MB
}

fn default_cors_mode() -> String {
    "restrictive".to_string()
}

impl Config {
    /// Load configuration from defaults, `./config.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Loading configuration from: {}", path.display());
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.service.name.trim().is_empty() {
            return Err(invalid("service.name cannot be empty"));
        }

        if self.service.port == 0 {
            return Err(invalid("service.port must be greater than 0"));
        }

        if !VALID_LOG_LEVELS.contains(&self.service.log_level.as_str()) {
            return Err(invalid(format!(
                "service.log_level must be one of: {}",
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if self.service.timeout_secs == 0 {
            return Err(invalid("service.timeout_secs must be greater than 0"));
        }

        if self.middleware.body_limit_mb == 0 {
            return Err(invalid("middleware.body_limit_mb must be greater than 0"));
        }

        if self.middleware.body_limit_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(invalid("middleware.body_limit_mb is too large"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Config(Box::new(figment::Error::from(message.into())))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "connect-service".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                log_format: LogFormat::default(),
                timeout_secs: default_timeout(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}
