//! Identification document selection view.

use super::ViewDefinition;
use crate::domains::views::service::ViewContext;
use crate::domains::views::template;

/// Wraps the frontend's document-type picker and relays selections to
/// `build_identification_message`.
pub struct IdentificationView;

impl IdentificationView {
    const FRONTEND_ROUTE: &'static str = "/identification";
    const MESSAGE_TYPE: &'static str = "identification_selected";
    const TOOL_NAME: &'static str = "build_identification_message";
}

impl ViewDefinition for IdentificationView {
    const URI: &'static str = "ui://catalog/identification.html";
    const NAME: &'static str = "Identification Selection";
    const DESCRIPTION: &'static str =
        "Catalog view for choosing an identification document type; selections \
         are confirmed through the identification message tool";

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
        assert_eq!(IdentificationView::URI, "ui://catalog/identification.html");
        assert_eq!(IdentificationView::MIME_TYPE, "text/html");
    }

    #[test]
    fn test_render_wires_bridge() {
        let state = AppState::new();
        let ctx = ViewContext {
            frontend_origin: "https://front.example",
            state: &state,
        };
        let html = IdentificationView::render(&ctx);
        assert!(html.contains(r#"src="https://front.example/identification""#));
        assert!(html.contains("identification_selected"));
        assert!(html.contains("build_identification_message"));
    }
}
