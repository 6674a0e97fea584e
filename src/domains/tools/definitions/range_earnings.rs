//! Range earnings message tool definition.
//!
//! Maps an income bracket selection code to its confirmation message.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::selections;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the range earnings message tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RangeEarningsParams {
    /// Selection code emitted by the income bracket picker.
    pub value: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Builds the confirmation message for an income bracket selection.
pub struct RangeEarningsMessageTool;

impl RangeEarningsMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "build_range_earnings_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Build the confirmation message for an income bracket selection code.";

    /// Execute the tool logic. Pure: every input is accepted.
    #[instrument(skip_all, fields(value = %params.value))]
    pub fn execute(params: &RangeEarningsParams) -> CallToolResult {
        info!("Range earnings selection: {}", params.value);

        let text = selections::RANGE_EARNINGS.message(&params.value);
        CallToolResult::success(vec![Content::text(text)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let value = arguments
            .get("value")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'value' parameter"))?
            .to_string();

        let result = Self::execute(&RangeEarningsParams { value });

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RangeEarningsParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: RangeEarningsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
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

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_known_code_returns_literal() {
        let params = RangeEarningsParams {
            value: "1200_2500".to_string(),
        };
        let result = RangeEarningsMessageTool::execute(&params);
        assert_eq!(
            text_of(&result),
            "SOLO COMENTA: Elegiste **S/ 1200 - S/ 2500**. NOTA: no coloques níngun mensaje adicional ni modifiques nada."
        );
    }

    #[test]
    fn test_unknown_code_degrades_to_fallback() {
        let params = RangeEarningsParams {
            value: "gt_9000".to_string(),
        };
        let result = RangeEarningsMessageTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(text_of(&result), "Recibí tu selección: gt_9000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "value": "lt_1200" });
        let result = RangeEarningsMessageTool::http_handler(args).unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_param() {
        let result = RangeEarningsMessageTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }
}
