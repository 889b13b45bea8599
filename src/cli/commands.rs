//! CLI command implementations
//!
//! `serve` loads configuration, builds the tokio runtime, and blocks on
//! the HTTP server until shutdown.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(config.as_deref()),
    }
}

/// Load configuration and run the HTTP server
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    Logger::info("BOOT", &[("port", &config.port.to_string())]);

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Read config from a file when given, otherwise start from defaults.
/// Environment overrides apply in both cases.
pub fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|e| {
                CliError::config_error(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                CliError::config_error(format!("Invalid config {}: {}", path.display(), e))
            })?
        }
        None => ServerConfig::default(),
    };

    config.overlay_env();
    Ok(config)
}
