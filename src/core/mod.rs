//! Core module containing shared infrastructure components.
//!
//! Foundational building blocks for the server: error handling,
//! configuration, shared state, server lifecycle management, and transport
//! layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use state::{AppState, PendingCount};
pub use transport::{TransportConfig, TransportService};
