//! Configuration management for the catalog app server.
//!
//! Configuration is populated from environment variables (with `dotenvy`
//! support for local `.env` files) on top of built-in defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default origin of the remote frontend embedded by the views.
const DEFAULT_FRONTEND_ORIGIN: &str = "https://poc-back-ai-front.netlify.app";

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Embedded frontend configuration.
    pub frontend: FrontendConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote frontend the views embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Origin (scheme + host) of the frontend application.
    ///
    /// View pages point their iframe at routes under this origin.
    pub origin: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "catalog-app-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            frontend: FrontendConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`:
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_FRONTEND_ORIGIN`, plus the
    /// transport variables handled by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(origin) = std::env::var("MCP_FRONTEND_ORIGIN") {
            // Views build URLs as "{origin}{route}", so a trailing slash
            // would produce double slashes.
            config.frontend.origin = origin.trim_end_matches('/').to_string();
            info!("Frontend origin set to {}", config.frontend.origin);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_frontend_origin_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_FRONTEND_ORIGIN");
        }
        let config = Config::from_env();
        assert_eq!(config.frontend.origin, DEFAULT_FRONTEND_ORIGIN);
    }

    #[test]
    fn test_frontend_origin_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FRONTEND_ORIGIN", "https://staging.example.com/");
        }
        let config = Config::from_env();
        assert_eq!(config.frontend.origin, "https://staging.example.com");
        unsafe {
            std::env::remove_var("MCP_FRONTEND_ORIGIN");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "catalog-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "catalog-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
