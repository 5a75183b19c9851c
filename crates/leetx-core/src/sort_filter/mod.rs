//! Client-side sort and filter for the listing pages.
//!
//! The site renders each sort/filter choice as an `<li>` whose raw value is
//! the path of the page with that choice applied. Requests are resolved by
//! finding the matching option and navigating to its path:
//!
//! - [`parse_raw_value`] decodes a raw value into a [`ParsedDescriptor`]
//! - [`resolve`] picks the target path for a [`SortFilterRequest`]
//! - [`apply`] runs a request against a [`SortFilterPage`]

mod raw_value;
mod resolver;

pub use raw_value::{ParsedDescriptor, parse_raw_value};
pub use resolver::{Resolution, SortFilterPage, apply, navigation_url, resolve};

/// Which widget of the sort/filter bar a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Category filter widget.
    Left,
    /// Sort widget.
    Right,
}

impl Side {
    /// Class fragment used by the host markup (`.box-info-left`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// What the widget on this side does, for diagnostics.
    pub fn purpose(self) -> &'static str {
        match self {
            Self::Left => "filtering",
            Self::Right => "sorting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an order token, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// Path token as the site spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// A caller's sort or filter wish.
///
/// `Side::Right` requests sort by `category`; `Side::Left` requests filter
/// to `category`. `sort_order` is only meaningful for sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortFilterRequest {
    pub category: String,
    pub sort_order: Option<SortOrder>,
    pub side: Side,
}

impl SortFilterRequest {
    pub fn sort(category: impl Into<String>, order: SortOrder) -> Self {
        Self {
            category: category.into(),
            sort_order: Some(order),
            side: Side::Right,
        }
    }

    pub fn filter(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sort_order: None,
            side: Side::Left,
        }
    }
}

/// Snapshot of one `<li>` in a sort or filter widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortFilterOption {
    /// `data-raw-value`, if the element carries one.
    pub raw_value: Option<String>,
    /// Visible text content.
    pub display_text: String,
    /// Whether the option has the `selected` class.
    pub is_selected: bool,
}

impl SortFilterOption {
    pub fn new(raw_value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            raw_value: Some(raw_value.into()),
            display_text: display_text.into(),
            is_selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// Decoded raw value, if it uses a known encoding.
    pub fn descriptor(&self) -> Option<ParsedDescriptor> {
        parse_raw_value(self.raw_value.as_deref())
    }
}
