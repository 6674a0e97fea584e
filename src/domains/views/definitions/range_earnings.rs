//! Income bracket selection view.

use super::ViewDefinition;
use crate::domains::views::service::ViewContext;
use crate::domains::views::template;

/// Wraps the frontend's income bracket picker and relays selections to
/// `build_range_earnings_message`.
pub struct RangeEarningsView;

impl RangeEarningsView {
    /// Frontend route for this view (the spelling is the frontend's, not ours).
    const FRONTEND_ROUTE: &'static str = "/range-earings";

    /// postMessage event type emitted by the frontend.
    const MESSAGE_TYPE: &'static str = "range_earnings_selected";

    /// Tool the bridge relays selections to.
    const TOOL_NAME: &'static str = "build_range_earnings_message";
}

impl ViewDefinition for RangeEarningsView {
    const URI: &'static str = "ui://catalog/range-earnings.html";
    const NAME: &'static str = "Income Bracket Selection";
    const DESCRIPTION: &'static str =
        "Catalog view for choosing a monthly income bracket; selections are \
         confirmed through the range earnings message tool";

    fn render(ctx: &ViewContext<'_>) -> String {
        let url = format!("{}{}", ctx.frontend_origin, Self::FRONTEND_ROUTE);
        template::bridge_page(&url, Self::MESSAGE_TYPE, Self::TOOL_NAME)
    }
}
