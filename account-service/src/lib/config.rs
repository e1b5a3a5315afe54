use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Symmetric signing key shared by issuance and verification.
    pub secret: String,

    /// Signing algorithm name (HMAC family), e.g. "HS256".
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,

    #[serde(default = "default_refresh_token_expire_days")]
    pub refresh_token_expire_days: i64,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

fn default_refresh_token_expire_days() -> i64 {
    7
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
