//! View Registry - central registration of all views.
//!
//! When adding a new view:
//! 1. Create the view file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_views()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    BenefitsView, CardDashboardView, IdentificationView, RangeEarningsView, ViewDefinition,
};
use super::service::ViewEntry;

/// Build a registry entry from a view definition.
fn build_view<V: ViewDefinition>() -> ViewEntry {
    let mut raw = RawResource::new(V::URI, V::NAME);
    raw.description = Some(V::DESCRIPTION.to_string());
    raw.mime_type = Some(V::MIME_TYPE.to_string());

    ViewEntry {
        resource: raw.no_annotation(),
        render: V::render,
    }
}

/// Get all registered views as ViewEntries.
///
/// This is the central place where all views are registered.
pub fn get_all_views() -> Vec<ViewEntry> {
    vec![
        build_view::<RangeEarningsView>(),
        build_view::<BenefitsView>(),
        build_view::<IdentificationView>(),
        build_view::<CardDashboardView>(),
    ]
}

/// Get the list of all view URIs.
pub fn view_uris() -> Vec<&'static str> {
    vec![
        RangeEarningsView::URI,
        BenefitsView::URI,
        IdentificationView::URI,
        CardDashboardView::URI,
    ]
}
