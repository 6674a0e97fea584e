//! View service implementation.
//!
//! The ViewService manages view discovery and rendering. It maintains a
//! registry of available views and handles MCP resource read requests.
//!
//! Views are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new view does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ViewError;
use super::registry::get_all_views;
use crate::core::config::FrontendConfig;
use crate::core::state::AppState;

/// Everything a view needs to render itself.
///
/// Views are pure functions of this context: the frontend origin from the
/// configuration and the shared state holding the pending dashboard count.
pub struct ViewContext<'a> {
    /// Origin of the embedded frontend application.
    pub frontend_origin: &'a str,

    /// Shared tool/view state.
    pub state: &'a AppState,
}

/// Render function of a registered view.
pub type RenderFn = fn(&ViewContext<'_>) -> String;

/// An entry in the view registry.
#[derive(Debug, Clone)]
pub struct ViewEntry {
    /// The MCP resource metadata.
    pub resource: Resource,

    /// Renders the HTML document for this view.
    pub render: RenderFn,
}

/// Service for listing and rendering views.
pub struct ViewService {
    /// Frontend configuration used to build embedded URLs.
    frontend: FrontendConfig,

    /// State shared with the tools domain.
    state: Arc<AppState>,

    /// Registry of available views, keyed by resource URI.
    views: HashMap<String, ViewEntry>,
}

impl ViewService {
    /// Create a new ViewService with the given configuration and state.
    pub fn new(frontend: FrontendConfig, state: Arc<AppState>) -> Self {
        info!("Initializing ViewService");

        let mut service = Self {
            frontend,
            state,
            views: HashMap::new(),
        };

        // Register all views from the registry
        service.register_from_registry();

        service
    }

    /// Register all views from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering views from registry");
        for entry in get_all_views() {
            self.register_view(entry);
        }
    }

    /// Register a view.
    pub fn register_view(&mut self, entry: ViewEntry) {
        info!("Registering view: {}", entry.resource.raw.uri);
        self.views.insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available views as MCP resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.views
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a view by URI, rendering its HTML document.
    ///
    /// Rendering the card-dashboard view consumes the pending count, so a
    /// read is not idempotent for that view. That mirrors the one-shot
    /// contract between `open_card_dashboard` and the dashboard render.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ViewError> {
        let entry = self
            .views
            .get(uri)
            .ok_or_else(|| ViewError::not_found(uri))?;

        let ctx = ViewContext {
            frontend_origin: &self.frontend.origin,
            state: &self.state,
        };

        let html = (entry.render)(&ctx);

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: html,
                meta: None,
            }],
        })
    }
}
