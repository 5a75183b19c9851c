//! Raw-value decoding.
//!
//! A raw value is a `/`-delimited path. Segment 1 names the encoding:
//!
//! ```text
//! /sort-search/<query>/<by>/<order>/<page>/                 by @ 3, order @ 4
//! /sort-category-search/<query>/<cat>/<by>/<order>/<page>/  by @ 4, order @ 5
//! /category-search/<query>/<cat>/<page>/                    category @ 3
//! ```
//!
//! The two sort shapes coexist on one page depending on whether a category
//! filter is active, so neither is treated as the canonical one.

use super::SortOrder;
use crate::config::{CATEGORY_SORT_MARKER, FILTER_MARKER, SORT_MARKER};

/// Decoded form of a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDescriptor {
    Sort {
        /// Lower-cased sort key, e.g. `"size"`.
        sort_by: String,
        sort_order: SortOrder,
        /// Position of the order token in `segments`.
        sort_order_index: usize,
        /// Every segment of the raw value, original casing preserved.
        segments: Vec<String>,
    },
    Filter {
        /// Lower-cased category, e.g. `"movies"`.
        category: String,
    },
}

impl ParsedDescriptor {
    /// Case-insensitive category check for either variant.
    pub fn has_category(&self, category: &str) -> bool {
        let token = match self {
            Self::Sort { sort_by, .. } => sort_by,
            Self::Filter { category } => category,
        };
        token.eq_ignore_ascii_case(category)
    }

    /// Rebuild the raw value with the order token replaced.
    ///
    /// Every other segment, the category included, is left untouched.
    /// Returns `None` for filter descriptors and for an order index past the
    /// last segment.
    pub fn with_order(&self, order: SortOrder) -> Option<String> {
        let Self::Sort {
            sort_order_index,
            segments,
            ..
        } = self
        else {
            return None;
        };

        let mut segments = segments.clone();
        *segments.get_mut(*sort_order_index)? = order.as_str().to_string();
        Some(segments.join("/"))
    }
}

/// Decode a raw value. `None` for a missing value or an unknown shape.
pub fn parse_raw_value(raw: Option<&str>) -> Option<ParsedDescriptor> {
    let raw = raw?;
    let segments: Vec<&str> = raw.split('/').collect();
    let marker = segments.get(1).copied()?;

    let sort_positions = if marker == SORT_MARKER && segments.len() > 6 {
        Some((3, 4))
    } else if marker == CATEGORY_SORT_MARKER && segments.len() > 6 {
        Some((4, 5))
    } else {
        None
    };

    if let Some((by_index, order_index)) = sort_positions {
        let sort_order = SortOrder::parse(segments[order_index])?;
        return Some(ParsedDescriptor::Sort {
            sort_by: segments[by_index].to_lowercase(),
            sort_order,
            sort_order_index: order_index,
            segments: segments.iter().map(|s| s.to_string()).collect(),
        });
    }

    if marker == FILTER_MARKER && segments.len() > 3 {
        return Some(ParsedDescriptor::Filter {
            category: segments[3].to_lowercase(),
        });
    }

    None
}
