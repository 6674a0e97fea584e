//! Card benefit selection view.

use super::ViewDefinition;
use crate::domains::views::service::ViewContext;
use crate::domains::views::template;

/// Wraps the frontend's benefit picker and relays selections to
/// `build_benefits_message`.
pub struct BenefitsView;

impl BenefitsView {
    const FRONTEND_ROUTE: &'static str = "/benefits";
    const MESSAGE_TYPE: &'static str = "benefits_selected";
    const TOOL_NAME: &'static str = "build_benefits_message";
}

impl ViewDefinition for BenefitsView {
    const URI: &'static str = "ui://catalog/benefits.html";
    const NAME: &'static str = "Benefit Selection";
    const DESCRIPTION: &'static str =
        "Catalog view for choosing a card benefit type; selections are \
         confirmed through the benefits message tool";

    fn render(ctx: &ViewContext<'_>) -> String {
        let url = format!("{}{}", ctx.frontend_origin, Self::FRONTEND_ROUTE);
        template::bridge_page(&url, Self::MESSAGE_TYPE, Self::TOOL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;

    #[test]
    fn test_metadata() {
        assert_eq!(BenefitsView::URI, "ui://catalog/benefits.html");
        assert_eq!(BenefitsView::MIME_TYPE, "text/html");
    }

    #[test]
    fn test_render_wires_bridge() {
        let state = AppState::new();
        let ctx = ViewContext {
            frontend_origin: "https://front.example",
            state: &state,
        };
        let html = BenefitsView::render(&ctx);
        assert!(html.contains(r#"src="https://front.example/benefits""#));
        assert!(html.contains("benefits_selected"));
        assert!(html.contains("build_benefits_message"));
    }
}
