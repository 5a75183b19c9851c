//! Error types for the enhancement layer.
//!
//! None of these abort the page. Sort/filter failures are advisory and only
//! reach the console; [`LinkError::LinkNotFound`] is the one case shown to
//! the user.
//!
//! - [`SortFilterError`] - option lookup failures for sort/filter requests
//! - [`LinkError`] - magnet/download link resolution failures
//! - [`FetchError`] - network errors raised by a [`DocumentFetcher`](crate::link::DocumentFetcher)
//! - [`ConfigError`] - invalid shortcut tables

use thiserror::Error;

use crate::link::LinkKind;
use crate::sort_filter::Side;

/// Reasons a sort/filter request did not lead to navigation.
///
/// An already-applied request is not an error; see
/// [`Resolution::AlreadySatisfied`](crate::sort_filter::Resolution::AlreadySatisfied).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortFilterError {
    #[error("No options found for {}.", .side.purpose())]
    NoOptionsFound { side: Side },

    #[error("No {category} found under {} options.", .side.purpose())]
    NoMatchFound { category: String, side: Side },

    /// The current location could not be parsed as a URL.
    #[error("Cannot rewrite location '{0}'")]
    InvalidLocation(String),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,

    #[error("Failed to create request")]
    RequestCreationFailed,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error: {0}")]
    HttpError(u16),

    #[error("Failed to read response")]
    ResponseReadFailed,

    #[error("Failed to parse response document")]
    ParseFailed,

    #[error("Request timed out")]
    Timeout,
}

/// Failures while resolving a trigger cell into a magnet or download link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("No {} link found.", .0.label())]
    LinkNotFound(LinkKind),

    #[error("Failed to fetch {} link: {source}", .kind.label())]
    FetchFailed {
        kind: LinkKind,
        #[source]
        source: FetchError,
    },
}

/// Shortcut table construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Key combo '{0}' is bound more than once")]
    DuplicateShortcut(String),
}
