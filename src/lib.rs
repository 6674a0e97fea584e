//! Catalog App Server
//!
//! An MCP (Model Context Protocol) server that exposes a small catalog UI to
//! an embedding app host: selection-confirmation tools and the HTML views
//! that wrap the remote frontend in an iframe.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, shared state, the main server
//!   handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **selections**: Table-driven catalog mapping selection codes to
//!     confirmation messages
//!   - **tools**: MCP tools callable by the host and by the embedded views
//!   - **views**: HTML view resources served to the host
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_app_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
