use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root URL of the pet service, e.g. `http://localhost:8000`.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiConfig,
}

impl DashboardConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("config/dashboard").required(false))
            // e.g. VETDESK__API__BASE_URL
            .add_source(Environment::with_prefix("VETDESK").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder().set_default("api.base_url", "http://localhost:8000")
    }
}
