//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::state::AppState;

#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{
    BenefitsMessageTool, IdentificationMessageTool, OpenCardDashboardTool, OpenUiTool,
    RangeEarningsMessageTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    state: Arc<AppState>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the server's state.
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            OpenUiTool::NAME,
            RangeEarningsMessageTool::NAME,
            BenefitsMessageTool::NAME,
            IdentificationMessageTool::NAME,
            OpenCardDashboardTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            OpenUiTool::to_tool(),
            RangeEarningsMessageTool::to_tool(),
            BenefitsMessageTool::to_tool(),
            IdentificationMessageTool::to_tool(),
            OpenCardDashboardTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            OpenUiTool::NAME => OpenUiTool::http_handler(arguments),
            RangeEarningsMessageTool::NAME => RangeEarningsMessageTool::http_handler(arguments),
            BenefitsMessageTool::NAME => BenefitsMessageTool::http_handler(arguments),
            IdentificationMessageTool::NAME => IdentificationMessageTool::http_handler(arguments),
            OpenCardDashboardTool::NAME => {
                OpenCardDashboardTool::http_handler(arguments, self.state.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
