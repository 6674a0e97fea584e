//! Open UI tool definition.
//!
//! Entry point for the catalog app: tells the host which view to display.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;
use crate::domains::views::ViewDefinition;
use crate::domains::views::definitions::RangeEarningsView;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the open UI tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct OpenUiParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Open UI tool - opens the main catalog view in the host.
pub struct OpenUiTool;

impl OpenUiTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "open_ui";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Open the catalog UI. The structured result names the view resource the host should display.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute() -> CallToolResult {
        info!("Open UI tool called");

        CallToolResult {
            content: vec![Content::text("Abriendo UI…")],
            structured_content: Some(serde_json::json!({
                "resource_uri": RangeEarningsView::URI,
            })),
            is_error: Some(false),
            meta: None,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let result = Self::execute();

        Ok(serde_json::json!({
            "content": result.content,
            "structuredContent": result.structured_content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OpenUiParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, McpError>(Self::execute()) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ui_text() {
        let result = OpenUiTool::execute();
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Abriendo UI…");
    }

    #[test]
    fn test_open_ui_names_main_view() {
        let result = OpenUiTool::execute();
        let structured = result.structured_content.expect("structured payload");
        assert_eq!(
            structured.get("resource_uri").and_then(|v| v.as_str()),
            Some("ui://catalog/range-earnings.html")
        );
    }
}
