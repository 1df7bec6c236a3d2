use std::str::FromStr;

use anyhow::Result;
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub url: String,
}

/// Opens the pool, creating the database file on first access, and brings
/// the schema up to date with the embedded migrations.
pub async fn create_pool(settings: &Settings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::migrate!("db/migrations").run(&pool).await?;

    tracing::info!("Connected to {}", settings.url);

    Ok(pool)
}
