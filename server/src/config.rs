use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use database::PoolSettings;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// Optional database URL. If not provided, defaults to a per-user
    /// sqlite file
    pub url: Option<String>,
    /// Maximum number of database connections in the pool
    pub max_connections: u32,
    /// Seconds to wait for a free connection from the pool
    pub acquire_timeout: u64,
    /// Seconds an idle connection may live before being recycled
    pub idle_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Listen address for the HTTP server
    pub listen_addr: String,
    /// Port number to listen on
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Config {
    /// Load configuration from environment variables and config files
    pub fn from_env() -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        // Start with default configuration
        builder = builder.add_source(File::from_str(
            include_str!("../config/default.toml"),
            FileFormat::Toml,
        ));

        // Add config file if specified
        if let Ok(config_file) = env::var("CONFIG_FILE") {
            builder = builder.add_source(
                File::with_name(&config_file)
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TODO_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TODO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Handle standard environment variables (DATABASE_URL, LISTEN_ADDR,
        // LOG_LEVEL) for compatibility with common deployment patterns
        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// Load configuration from a specific file path
    pub fn from_file(path: &str) -> Result<Self> {
        let builder = ConfigBuilder::builder()
            .add_source(File::with_name(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("TODO")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder
            .build()
            .context("Failed to build configuration from file")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration from file")
    }

    /// Apply standard environment variables (DATABASE_URL, LISTEN_ADDR,
    /// LOG_LEVEL)
    fn apply_standard_env_vars(config: &mut Config) {
        if let Ok(database_url) = env::var("DATABASE_URL") {
            config.database.url = Some(database_url);
        }

        if let Ok(listen_addr) = env::var("LISTEN_ADDR") {
            config.server.listen_addr = listen_addr;
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.logging.level = log_level;
        }
    }

    /// Get the database URL with a per-user default fallback
    pub fn database_url(&self) -> String {
        match &self.database.url {
            Some(url) => url.clone(),
            None => Self::default_database_url(),
        }
    }

    /// Get the default database URL
    pub fn default_database_url() -> String {
        // Use XDG_DATA_HOME if available (better for containers/production)
        if let Ok(xdg_data) = env::var("XDG_DATA_HOME") {
            return format!("sqlite://{xdg_data}/todo-api/todo-api.sqlite");
        }

        // Fallback to HOME directory
        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        format!("sqlite://{home}/todo-api.sqlite")
    }

    /// Get the server socket address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.listen_addr, self.server.port)
    }

    /// Pool construction parameters for the repository
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.database.max_connections,
            acquire_timeout: Duration::from_secs(self.database.acquire_timeout),
            idle_timeout: Duration::from_secs(self.database.idle_timeout),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        // Validate database URL format (both configured and default)
        let database_url = self.database_url();
        if !database_url.starts_with("sqlite://") {
            return Err(anyhow::anyhow!(
                "Only SQLite databases are supported. URL must start with 'sqlite://'. Got: {}",
                database_url
            ));
        }

        // Validate server configuration
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.database.max_connections == 0 {
            return Err(anyhow::anyhow!(
                "Database max_connections must be greater than 0"
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: None,
                max_connections: 5,
                acquire_timeout: 30,
                idle_timeout: 1800,
            },
            server: ServerConfig {
                listen_addr: "127.0.0.1".to_string(),
                port: 8000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_database_url_with_default() {
        let config = Config::default();
        let url = config.database_url();
        assert!(url.starts_with("sqlite://"));
    }

    #[test]
    fn test_database_url_with_custom() {
        let mut config = Config::default();
        config.database.url = Some("sqlite://custom.db".to_string());
        assert_eq!(config.database_url(), "sqlite://custom.db");
    }

    #[test]
    fn test_server_address() {
        let config = Config::default();
        assert_eq!(config.server_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_pool_settings() {
        let config = Config::default();
        let settings = config.pool_settings();
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.idle_timeout, Duration::from_secs(1800));
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = Config::default();
        invalid_config.logging.level = "invalid".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = Config::default();
        invalid_config.server.port = 0;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = Config::default();
        invalid_config.database.url = Some("postgres://elsewhere/db".to_string());
        assert!(invalid_config.validate().is_err());
    }
}
