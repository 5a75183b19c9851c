//! Browser-side configuration.
//!
//! Host markup selectors and the shortcut table live in
//! `leetx_core::config`; this module only holds what the wasm glue needs.

// =============================================================================
// Assets (loaded at compile time)
// =============================================================================

/// Stylesheet injected into the host page on load.
pub const STYLESHEET: &str = include_str!("../assets/enhance.css");

// =============================================================================
// Network Configuration
// =============================================================================

/// Torrent page fetch timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Id of the node the help overlay is mounted into.
pub const HELP_ROOT_ID: &str = "leetx-help-root";
