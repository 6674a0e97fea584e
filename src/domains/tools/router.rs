//! Tool Router - builds the rmcp ToolRouter from the registered tools.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; only the dashboard tool needs the shared state.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::state::AppState;

use super::definitions::{
    BenefitsMessageTool, IdentificationMessageTool, OpenCardDashboardTool, OpenUiTool,
    RangeEarningsMessageTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(state: Arc<AppState>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(OpenUiTool::create_route())
        .with_route(RangeEarningsMessageTool::create_route())
        .with_route(BenefitsMessageTool::create_route())
        .with_route(IdentificationMessageTool::create_route())
        .with_route(OpenCardDashboardTool::create_route(state))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(AppState::new()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"open_ui"));
        assert!(names.contains(&"build_range_earnings_message"));
        assert!(names.contains(&"build_benefits_message"));
        assert!(names.contains(&"build_identification_message"));
        assert!(names.contains(&"open_card_dashboard"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let state = Arc::new(AppState::new());
        let registry = ToolRegistry::new(state.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(state);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
