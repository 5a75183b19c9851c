//! UI components mounted into the host page.

mod help;

pub use help::HelpOverlay;
