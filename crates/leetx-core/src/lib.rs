//! Browser-independent logic of the 1337x enhancement layer.
//!
//! - [`keys`] - canonical key combos from keyboard events
//! - [`shortcuts`] - the shortcut table and its dispatch
//! - [`sort_filter`] - raw-value parsing and sort/filter URL rewriting
//! - [`column`] - planning of the injected magnet/download column
//! - [`link`] - magnet and direct-download link resolution
//!
//! Everything that touches the live page sits behind small port traits
//! ([`SortFilterPage`](sort_filter::SortFilterPage),
//! [`DocumentFetcher`](link::DocumentFetcher), [`LinkUi`](link::LinkUi)) so
//! it can be exercised without a document.

pub mod column;
pub mod config;
pub mod error;
pub mod keys;
pub mod link;
pub mod shortcuts;
pub mod sort_filter;

pub use column::{ColumnCell, FirstColumnCell, ListingMode, plan_column};
pub use error::{ConfigError, FetchError, LinkError, SortFilterError};
pub use keys::{KeyInput, KeyTarget, normalize};
pub use link::{LinkHandler, LinkKind, ResolveLink};
pub use shortcuts::{Action, ShortcutBinding, Shortcuts};
pub use sort_filter::{
    ParsedDescriptor, Resolution, Side, SortFilterOption, SortFilterRequest, SortOrder,
    parse_raw_value,
};
