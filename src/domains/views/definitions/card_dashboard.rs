//! Card dashboard view.
//!
//! The only dynamic view: if a pending count was stashed by
//! `open_card_dashboard`, it is appended once to the embedded URL as a
//! `count` query parameter and the cell is cleared. The dashboard has no
//! selection to relay, so the page carries no bridge script.

use tracing::warn;

use super::ViewDefinition;
use crate::domains::views::service::ViewContext;
use crate::domains::views::template;

/// Wraps the frontend's card dashboard listing.
pub struct CardDashboardView;

impl CardDashboardView {
    const FRONTEND_ROUTE: &'static str = "/card-dashboard";
}

impl ViewDefinition for CardDashboardView {
    const URI: &'static str = "ui://catalog/card-dashboard.html";
    const NAME: &'static str = "Card Dashboard";
    const DESCRIPTION: &'static str =
        "Catalog view listing the user's cards; shows the number of results \
         requested by the most recent open_card_dashboard call";

    fn render(ctx: &ViewContext<'_>) -> String {
        let mut url = format!("{}{}", ctx.frontend_origin, Self::FRONTEND_ROUTE);

        // One-shot: consuming the pending count clears it for the next render.
        if let Some(count) = ctx.state.card_dashboard_count.take() {
            match serde_urlencoded::to_string([("count", count)]) {
                Ok(query) => url = format!("{}?{}", url, query),
                Err(e) => warn!("Failed to encode dashboard count: {}", e),
            }
        }

        template::embed_page(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;

    fn render_with(state: &AppState) -> String {
        let ctx = ViewContext {
            frontend_origin: "https://front.example",
            state,
        };
        CardDashboardView::render(&ctx)
    }

    #[test]
    fn test_metadata() {
        assert_eq!(CardDashboardView::URI, "ui://catalog/card-dashboard.html");
        assert_eq!(CardDashboardView::MIME_TYPE, "text/html");
    }

    #[test]
    fn test_render_without_pending_count() {
        let state = AppState::new();
        let html = render_with(&state);
        assert!(html.contains(r#"src="https://front.example/card-dashboard""#));
        assert!(!html.contains("count="));
    }

    #[test]
    fn test_render_includes_count_exactly_once() {
        let state = AppState::new();
        state.card_dashboard_count.set(4);
        let html = render_with(&state);
        assert_eq!(html.matches("count=4").count(), 1);
        assert!(html.contains(r#"src="https://front.example/card-dashboard?count=4""#));
    }

    #[test]
    fn test_render_consumes_count() {
        let state = AppState::new();
        state.card_dashboard_count.set(2);
        let first = render_with(&state);
        assert!(first.contains("count=2"));

        let second = render_with(&state);
        assert!(!second.contains("count="));
    }

    #[test]
    fn test_out_of_range_count_absent() {
        let state = AppState::new();
        state.card_dashboard_count.set(6);
        let html = render_with(&state);
        assert!(!html.contains("count="));
    }

    #[test]
    fn test_no_bridge_script() {
        let state = AppState::new();
        assert!(!render_with(&state).contains("<script"));
    }
}
