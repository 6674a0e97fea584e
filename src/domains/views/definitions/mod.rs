//! View definitions module.
//!
//! Each view is defined in its own file with:
//! - URI and metadata
//! - A render function taking the shared [`ViewContext`]
//!
//! ## Adding a New View
//!
//! 1. Create a new file (e.g., `my_view.rs`)
//! 2. Implement the `ViewDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod benefits;
mod card_dashboard;
mod identification;
mod range_earnings;

pub use benefits::BenefitsView;
pub use card_dashboard::CardDashboardView;
pub use identification::IdentificationView;
pub use range_earnings::RangeEarningsView;

use super::service::ViewContext;

/// Trait for view definitions.
///
/// Each view provides its resource metadata and renders its HTML document
/// from the shared context.
pub trait ViewDefinition {
    /// The unique URI of the view resource.
    const URI: &'static str;

    /// The display name of the view.
    const NAME: &'static str;

    /// A description of the view.
    const DESCRIPTION: &'static str;

    /// The MIME type of the rendered document.
    const MIME_TYPE: &'static str = "text/html";

    /// Render the HTML document for this view.
    fn render(ctx: &ViewContext<'_>) -> String;
}
