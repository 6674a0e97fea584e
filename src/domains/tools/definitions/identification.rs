//! Identification message tool definition.
//!
//! Maps an identification document selection code to its confirmation
//! message. This is the one flow that chains into another operation: the
//! structured payload directs the caller to open the card dashboard with a
//! randomly drawn result count, simulating a variable-size card listing.

use futures::FutureExt;
use rand::Rng;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::state::{COUNT_MAX, COUNT_MIN};
use crate::domains::selections;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::card_dashboard::OpenCardDashboardTool;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the identification message tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IdentificationParams {
    /// Selection code emitted by the document-type picker.
    pub value: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Builds the confirmation message for an identification selection and emits
/// the chained dashboard directive.
pub struct IdentificationMessageTool;

impl IdentificationMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "build_identification_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Build the confirmation message for an identification document selection code. \
         The structured result directs the caller to open the card dashboard next.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(value = %params.value))]
    pub fn execute(params: &IdentificationParams) -> CallToolResult {
        let count = draw_card_count(&mut rand::thread_rng());
        Self::execute_with_count(params, count)
    }

    /// Execute with a fixed chained count. Split out so tests can pin it.
    fn execute_with_count(params: &IdentificationParams, count: u8) -> CallToolResult {
        info!(
            "Identification selection: {} (chained count {})",
            params.value, count
        );

        let text = selections::IDENTIFICATION.message(&params.value);

        CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(serde_json::json!({
                "next_action": {
                    "tool": OpenCardDashboardTool::NAME,
                    "arguments": { "count": count },
                }
            })),
            is_error: Some(false),
            meta: None,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let value = arguments
            .get("value")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'value' parameter"))?
            .to_string();

        let result = Self::execute(&IdentificationParams { value });

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
            input_schema: cached_schema_for_type::<IdentificationParams>(),
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
                let params: IdentificationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Draw the chained dashboard count, uniform in [COUNT_MIN, COUNT_MAX].
fn draw_card_count(rng: &mut impl Rng) -> u8 {
    rng.gen_range(COUNT_MIN..=COUNT_MAX)
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
        let params = IdentificationParams {
            value: "dni".to_string(),
        };
        let result = IdentificationMessageTool::execute(&params);
        assert_eq!(
            text_of(&result),
            "SOLO COMENTA: Elegiste **DNI**. NOTA: no coloques níngun mensaje adicional ni modifiques nada."
        );
    }

    #[test]
    fn test_unknown_code_degrades_to_fallback() {
        let params = IdentificationParams {
            value: "licencia".to_string(),
        };
        let result = IdentificationMessageTool::execute(&params);
        assert_eq!(text_of(&result), "Recibí tu selección: licencia");
    }

    #[test]
    fn test_directive_names_dashboard_tool() {
        let params = IdentificationParams {
            value: "dni".to_string(),
        };
        let result = IdentificationMessageTool::execute_with_count(&params, 3);
        let structured = result.structured_content.expect("structured payload");

        let action = &structured["next_action"];
        assert_eq!(
            action["tool"].as_str(),
            Some("open_card_dashboard")
        );
        assert_eq!(action["arguments"]["count"].as_u64(), Some(3));
    }

    #[test]
    fn test_draw_card_count_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let n = draw_card_count(&mut rng);
            assert!((COUNT_MIN..=COUNT_MAX).contains(&n));
        }
    }

    #[test]
    fn test_draw_card_count_roughly_uniform() {
        let mut rng = rand::thread_rng();
        let mut counts = [0u32; (COUNT_MAX as usize) + 1];
        let samples = 5000;
        for _ in 0..samples {
            counts[draw_card_count(&mut rng) as usize] += 1;
        }

        assert_eq!(counts[0], 0);
        // Expected 1000 per bucket; allow a wide band so the test never flakes.
        for n in COUNT_MIN..=COUNT_MAX {
            let c = counts[n as usize];
            assert!(
                (700..=1300).contains(&c),
                "count {} drawn {} times out of {}",
                n,
                c,
                samples
            );
        }
    }
}
