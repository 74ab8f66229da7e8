//! API configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Variables that are not set keep their default value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("API").try_parsing(true))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
