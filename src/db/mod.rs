pub mod games;
pub mod models;
pub mod stats;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("numble");

    std::fs::create_dir_all(&path)
        .context("Failed to create numble data directory")?;

    path.push("numble.db");
    Ok(path)
}

/// Create a connection pool to the default database file
pub async fn create_pool() -> Result<SqlitePool> {
    let db_path = get_db_path()?;
    create_pool_at(&db_path).await
}

/// Create a connection pool to a specific database file
pub async fn create_pool_at(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    connect(options, 5).await
}

/// Single-connection in-memory database, gone when the pool closes
pub async fn create_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    connect(options, 1).await
}

async fn connect(options: SqliteConnectOptions, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
