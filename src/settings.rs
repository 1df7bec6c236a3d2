use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::sqlite;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub sqlite: sqlite::Settings,
    pub api: Api,
}

#[derive(Debug, Deserialize)]
pub struct Api {
    pub port: u16,
}

impl Settings {
    /// Defaults, overridden by `config/default.toml` if present, overridden
    /// by environment variables (`SQLITE__URL`, `API__PORT`).
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("sqlite.url", "sqlite://db/bookcatalog.db")?
            .set_default("api.port", 3000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
