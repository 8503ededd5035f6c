use anyhow::{Context, Result};
use database::SqliteItemRepository;
use http_api::HttpServer;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;

/// Create the item repository from the complete configuration
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteItemRepository>> {
    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteItemRepository::new(&database_url, config.pool_settings())
        .await
        .context("Failed to create SQLite repository")?;

    info!("Running database migrations");
    repo.migrate()
        .await
        .context("Failed to run database migrations")?;

    info!("Item repository created successfully");
    Ok(Arc::new(repo))
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<HttpServer> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    let server = HttpServer::new(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    ensure_database_directory(&config.database_url())
}

/// Ensure the parent directory of a file-backed database exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        if db_path.contains(":memory:") {
            return Ok(());
        }

        let db_path = Path::new(db_path);
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
                info!("Created database directory: {}", parent.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_database_directory_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("nested");
        let url = format!("sqlite://{}/todo.sqlite", nested.display());

        ensure_database_directory(&url).unwrap();
        assert!(nested.exists());

        // Idempotent on an existing directory
        ensure_database_directory(&url).unwrap();
    }

    #[test]
    fn test_ensure_database_directory_skips_memory() {
        assert!(ensure_database_directory("sqlite://:memory:").is_ok());
        assert!(ensure_database_directory(":memory:").is_ok());
    }
}
