use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the tracing subscriber for logging
pub fn init_telemetry(config: &LoggingConfig) -> Result<()> {
    // Parse the log level from config; RUST_LOG wins when set
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Invalid log level configuration")?;

    let registry = Registry::default().with(env_filter);

    // Configure the formatter based on the selected format
    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            registry.with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_list(true)
                .flatten_event(true);

            registry.with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_target(true)
                .with_file(false)
                .with_line_number(false);

            registry.with(fmt_layer).init();
        }
    }

    tracing::info!(
        log_level = %config.level,
        log_format = ?config.format,
        "Telemetry initialized"
    );

    Ok(())
}

/// Log server startup information
pub fn log_startup_info(config: &crate::config::Config) {
    tracing::info!(
        server_address = %config.server_address(),
        database_url = %config.database_url(),
        max_connections = config.database.max_connections,
        "Todo API server starting up"
    );
}

/// Log server shutdown information
pub fn log_shutdown_info() {
    tracing::info!("Todo API server shutting down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        // Initialization itself can only happen once per process, so only
        // the configuration plumbing is exercised here
        let configs = vec![
            LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
            LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Json,
            },
            LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Compact,
            },
        ];

        for config in configs {
            assert!(matches!(
                config.format,
                LogFormat::Pretty | LogFormat::Json | LogFormat::Compact
            ));
        }
    }
}
