//! Benefits message tool definition.
//!
//! Maps a card benefit selection code to its confirmation message.

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

/// Parameters for the benefits message tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BenefitsParams {
    /// Selection code emitted by the benefit picker.
    pub value: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Builds the confirmation message for a benefit selection.
pub struct BenefitsMessageTool;

impl BenefitsMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "build_benefits_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Build the confirmation message for a card benefit selection code.";

    /// Execute the tool logic. Pure: every input is accepted.
    #[instrument(skip_all, fields(value = %params.value))]
    pub fn execute(params: &BenefitsParams) -> CallToolResult {
        info!("Benefits selection: {}", params.value);

        let text = selections::BENEFITS.message(&params.value);
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

        let result = Self::execute(&BenefitsParams { value });

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
            input_schema: cached_schema_for_type::<BenefitsParams>(),
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
                let params: BenefitsParams =
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
        let params = BenefitsParams {
            value: "cashback".to_string(),
        };
        let result = BenefitsMessageTool::execute(&params);
        assert_eq!(
            text_of(&result),
            "SOLO COMENTA: Elegiste **Cashback**. NOTA: no coloques níngun mensaje adicional ni modifiques nada."
        );
    }

    #[test]
    fn test_unknown_code_degrades_to_fallback() {
        let params = BenefitsParams {
            value: "puntos".to_string(),
        };
        let result = BenefitsMessageTool::execute(&params);
        assert_eq!(text_of(&result), "Recibí tu selección: puntos");
    }
}
