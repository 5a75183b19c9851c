//! Live-page adapters for the core ports.

use leetx_core::config::selectors::{RAW_VALUE_ATTR, SELECTED_CLASS, options};
use leetx_core::link::LinkUi;
use leetx_core::sort_filter::{Side, SortFilterOption, SortFilterPage};

use super::dom;

/// The host document as seen by the sort/filter resolver.
pub struct DomPage;

impl SortFilterPage for DomPage {
    fn options(&self, side: Side) -> Vec<SortFilterOption> {
        let Some(document) = dom::document() else {
            return Vec::new();
        };

        dom::elements(document.query_selector_all(&options(side.as_str())))
            .into_iter()
            .map(|li| SortFilterOption {
                raw_value: li.get_attribute(RAW_VALUE_ATTR),
                display_text: li.text_content().unwrap_or_default(),
                is_selected: li.class_list().contains(SELECTED_CLASS),
            })
            .collect()
    }

    fn current_url(&self) -> String {
        dom::location_href()
    }

    fn navigate(&self, url: &str) {
        dom::navigate(url);
    }
}

/// Cursor, navigation and alerts for the link resolver.
pub struct DomLinkUi;

impl LinkUi for DomLinkUi {
    fn set_busy(&self, busy: bool) {
        dom::set_body_cursor(if busy { "progress" } else { "auto" });
    }

    fn navigate(&self, url: &str) {
        dom::navigate(url);
    }

    fn notify(&self, message: &str) {
        dom::alert(message);
    }
}
