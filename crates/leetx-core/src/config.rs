//! Host page configuration.
//!
//! Centralizes the structural selectors, raw-value markers and the default
//! shortcut table. Everything the enhancement knows about the host markup
//! lives here; a markup change on the site means editing this file.

use crate::shortcuts::Action;
use crate::sort_filter::{SortFilterRequest, SortOrder};

// =============================================================================
// Raw-Value Markers
// =============================================================================

/// Segment 1 of a sort path on a plain search: `/sort-search/<q>/<by>/<order>/<page>/`.
pub const SORT_MARKER: &str = "sort-search";

/// Segment 1 of a sort path inside a category: `/sort-category-search/<q>/<cat>/<by>/<order>/<page>/`.
pub const CATEGORY_SORT_MARKER: &str = "sort-category-search";

/// Segment 1 of a category filter path: `/category-search/<q>/<cat>/<page>/`.
pub const FILTER_MARKER: &str = "category-search";

// =============================================================================
// Selectors
// =============================================================================

/// Sort/filter widget selectors.
pub mod selectors {
    /// Attribute carrying an option's raw value (`dataset.rawValue`).
    pub const RAW_VALUE_ATTR: &str = "data-raw-value";

    /// Class marking the currently applied option.
    pub const SELECTED_CLASS: &str = "selected";

    /// Search box focused by the `F` shortcut.
    pub const SEARCH_INPUT: &str = r#".ui-autocomplete-input[type="search"]"#;

    /// Option list selector for one side of the sort/filter bar.
    pub fn options(side: &str) -> String {
        format!(".box-info-{side}.sort-by-box .options li")
    }
}

/// Listing table selectors used by the column augmentor.
pub mod table {
    /// Container of one listing table (the home page has several).
    pub const WRAPPER: &str = ".table-list-wrap";

    /// Original first-column cells, header included, blank rows excluded.
    pub const FIRST_COLUMN: &str = ".table-list > thead > tr:not(.blank) > th:nth-child(1), \
         .table-list > tbody > tr:not(.blank) > td:nth-child(1)";

    /// URL fragment of listings rendered without a header row.
    pub const SERIES_PATH: &str = "/series/";

    /// Header title of the injected column.
    pub const COLUMN_TITLE: &str = "ml\u{a0}dl";

    /// Class added to every injected cell.
    pub const COLUMN_CLASS: &str = "coll-1b";

    /// Extra class for injected body cells.
    pub const BUTTONS_CLASS: &str = "dl-buttons";

    /// Trigger classes and icons: (class, icon class, title).
    pub const MAGNET_TRIGGER: (&str, &str, &str) =
        ("list-button-magnet", "flaticon-magnet", "Magnet");
    pub const DOWNLOAD_TRIGGER: (&str, &str, &str) = (
        "list-button-dl",
        "flaticon-torrent-download",
        "Direct Download",
    );

    /// Attribute holding the torrent page URL on a trigger.
    pub const HREF_ATTR: &str = "data-href";
}

/// Selectors searched in a fetched torrent page.
pub mod links {
    pub const MAGNET: &str = r#"a[href^="magnet:"]"#;
    pub const DIRECT_DOWNLOAD: &str = ".dropdown-menu > li > a";
}

// =============================================================================
// Shortcuts
// =============================================================================

/// Default shortcut table, in help-listing order.
///
/// Adding or removing a shortcut only requires editing this list.
pub fn configured_shortcuts() -> Vec<(&'static str, Action, &'static str)> {
    vec![
        ("F", Action::FocusSearch, "Focus search box"),
        (
            "A",
            Action::SortFilter(SortFilterRequest::filter("TV")),
            "Show TV only",
        ),
        (
            "D",
            Action::SortFilter(SortFilterRequest::filter("Movies")),
            "Show movies only",
        ),
        (
            "Shift + F",
            Action::SortFilter(SortFilterRequest::sort("size", SortOrder::Desc)),
            "Sort by size, largest first",
        ),
        (
            "Shift + G",
            Action::SortFilter(SortFilterRequest::sort("size", SortOrder::Asc)),
            "Sort by size, smallest first",
        ),
        ("Shift + ?", Action::ToggleHelp, "Show keyboard shortcuts"),
    ]
}
