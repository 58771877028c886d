pub mod decor;
pub mod hero;
pub mod navbar;
pub mod services;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the viewport to a section by id. Silently does nothing
/// when the element does not exist.
pub(crate) fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
