//! Views domain module.
//!
//! Views are the HTML documents served to the embedding host as MCP
//! resources. Each view wraps a route of the remote frontend in an iframe;
//! selection views also carry the postMessage-to-tool bridge script.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual view definitions (one file per view)
//! - `template.rs` - Shared iframe/bridge HTML builders
//! - `registry.rs` - Central view registration
//! - `service.rs` - View service for listing and rendering
//!
//! ## Adding a New View
//!
//! 1. Create a new file in `definitions/` (e.g., `my_view.rs`)
//! 2. Implement the `ViewDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod template;

pub use definitions::ViewDefinition;
pub use error::ViewError;
pub use registry::{get_all_views, view_uris};
pub use service::{RenderFn, ViewContext, ViewEntry, ViewService};
