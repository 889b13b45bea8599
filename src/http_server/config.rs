//! HTTP Server Configuration
//!
//! Host, port, API key, and CORS settings, loadable from a JSON file with
//! environment-variable overrides.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret required on mutating endpoints
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    "mysecretapikey".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: default_api_key(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply environment overrides.
    ///
    /// `CATALOGD_API_KEY` replaces the configured key when set and
    /// non-empty; `CATALOGD_PORT` replaces the port when it parses.
    pub fn overlay_env(&mut self) {
        self.overlay(
            std::env::var("CATALOGD_API_KEY").ok(),
            std::env::var("CATALOGD_PORT").ok(),
        );
    }

    fn overlay(&mut self, api_key: Option<String>, port: Option<String>) {
        if let Some(key) = api_key {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
        if let Some(port) = port.and_then(|p| p.parse().ok()) {
            self.port = port;
        }
    }
}
