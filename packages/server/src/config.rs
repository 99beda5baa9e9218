use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://vet-management.sqlite?mode=rwc`.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Load the sample pets and animal types into an empty database on startup.
    #[serde(default)]
    pub sample_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., VETDESK__SERVER__PORT)
            .add_source(Environment::with_prefix("VETDESK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load from a specific file on top of the built-in defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite://vet-management.sqlite?mode=rwc")
    }
}
