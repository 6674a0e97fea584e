//! Open card dashboard tool definition.
//!
//! Stashes the pending result count for the next dashboard render and tells
//! the host to display the dashboard view. The count is one-shot: the view
//! consumes it when it builds the embedded URL.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::state::AppState;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;
use crate::domains::views::ViewDefinition;
use crate::domains::views::definitions::CardDashboardView;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the open card dashboard tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct OpenCardDashboardParams {
    /// Number of cards the dashboard should list, in [1, 5]. Out-of-range,
    /// non-numeric, or missing values open the dashboard without a count.
    #[serde(default, deserialize_with = "count_or_absent")]
    pub count: Option<i64>,
}

/// Accepts any JSON value for `count`, mapping non-integer values to absent.
///
/// Deserialization must not fail here: `execute` clears any stale pending
/// count when no usable value arrives, and a hard error would skip that.
fn count_or_absent<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Opens the card dashboard view, optionally with a pending result count.
pub struct OpenCardDashboardTool;

impl OpenCardDashboardTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "open_card_dashboard";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Open the card dashboard view. An optional count in [1, 5] controls how many \
         cards the next dashboard render lists.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(count = ?params.count))]
    pub fn execute(params: &OpenCardDashboardParams, state: &AppState) -> CallToolResult {
        info!("Open card dashboard tool called with count {:?}", params.count);

        match params.count {
            Some(count) => state.card_dashboard_count.set(count),
            // No count: drop any stale value so it cannot leak into this render.
            None => state.card_dashboard_count.clear(),
        }

        CallToolResult {
            content: vec![Content::text("Abriendo panel de tarjetas…")],
            structured_content: Some(serde_json::json!({
                "resource_uri": CardDashboardView::URI,
            })),
            is_error: Some(false),
            meta: None,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        state: Arc<AppState>,
    ) -> Result<serde_json::Value, ToolError> {
        // Same lenient parse as the rmcp route: non-numeric counts become
        // absent, which still clears a stale pending value.
        let count = arguments.get("count").and_then(|v| v.as_i64());

        let result = Self::execute(&OpenCardDashboardParams { count }, &state);

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
            input_schema: cached_schema_for_type::<OpenCardDashboardParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(state: Arc<AppState>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let state = state.clone();
            async move {
                let params: OpenCardDashboardParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state))
            }
            .boxed()
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
    fn test_stashes_count_in_range() {
        let state = AppState::new();
        let params = OpenCardDashboardParams { count: Some(3) };

        let result = OpenCardDashboardTool::execute(&params, &state);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(state.card_dashboard_count.get(), Some(3));
    }

    #[test]
    fn test_out_of_range_count_treated_as_absent() {
        let state = AppState::new();
        for bad in [0, 6, -2] {
            let params = OpenCardDashboardParams { count: Some(bad) };
            OpenCardDashboardTool::execute(&params, &state);
            assert_eq!(state.card_dashboard_count.get(), None, "count {}", bad);
        }
    }

    #[test]
    fn test_non_numeric_count_deserializes_as_absent() {
        let params: OpenCardDashboardParams =
            serde_json::from_value(serde_json::json!({ "count": "many" }))
                .expect("lenient count must not fail deserialization");
        assert_eq!(params.count, None);
    }

    #[test]
    fn test_non_numeric_count_clears_stale_value() {
        let state = AppState::new();
        state.card_dashboard_count.set(4);

        // The same params path the rmcp route uses.
        let params: OpenCardDashboardParams =
            serde_json::from_value(serde_json::json!({ "count": "many" })).unwrap();
        OpenCardDashboardTool::execute(&params, &state);
        assert_eq!(state.card_dashboard_count.get(), None);
    }

    #[test]
    fn test_null_count_treated_as_absent() {
        let params: OpenCardDashboardParams =
            serde_json::from_value(serde_json::json!({ "count": null })).unwrap();
        assert_eq!(params.count, None);
    }

    #[test]
    fn test_missing_count_clears_stale_value() {
        let state = AppState::new();
        state.card_dashboard_count.set(2);

        let params = OpenCardDashboardParams { count: None };
        OpenCardDashboardTool::execute(&params, &state);
        assert_eq!(state.card_dashboard_count.get(), None);
    }

    #[test]
    fn test_names_dashboard_view() {
        let state = AppState::new();
        let params = OpenCardDashboardParams { count: Some(1) };

        let result = OpenCardDashboardTool::execute(&params, &state);
        let structured = result.structured_content.expect("structured payload");
        assert_eq!(
            structured.get("resource_uri").and_then(|v| v.as_str()),
            Some("ui://catalog/card-dashboard.html")
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_non_numeric_count() {
        let state = Arc::new(AppState::new());
        state.card_dashboard_count.set(4);

        let args = serde_json::json!({ "count": "many" });
        let result = OpenCardDashboardTool::http_handler(args, state.clone()).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(state.card_dashboard_count.get(), None);
    }
}
