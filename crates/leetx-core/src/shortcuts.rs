//! Shortcut dispatch table.
//!
//! One ordered, immutable table maps canonical key combos to actions. It
//! drives both key dispatch and the help overlay listing, so no other
//! component encodes a key binding.

use std::collections::HashSet;

use crate::config::configured_shortcuts;
use crate::error::ConfigError;
use crate::keys::{KeyInput, normalize};
use crate::sort_filter::SortFilterRequest;

/// Everything a shortcut can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus and select the site's search box.
    FocusSearch,
    /// Apply a server-side sort or category filter.
    SortFilter(SortFilterRequest),
    /// Show or hide the shortcut overlay.
    ToggleHelp,
}

/// A single key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    /// Canonical combo, e.g. `"Shift + F"`.
    pub key_combo: String,
    pub action: Action,
    /// Human-readable description for the help overlay.
    pub label: String,
}

/// The shortcut table, in help-listing order.
#[derive(Debug, Clone, Default)]
pub struct Shortcuts {
    bindings: Vec<ShortcutBinding>,
}

impl Shortcuts {
    /// Build a table, rejecting combos bound twice.
    pub fn new(bindings: Vec<ShortcutBinding>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        if let Some(dup) = bindings.iter().find(|b| !seen.insert(b.key_combo.as_str())) {
            return Err(ConfigError::DuplicateShortcut(dup.key_combo.clone()));
        }
        Ok(Self { bindings })
    }

    /// The table from [`configured_shortcuts`].
    pub fn configured() -> Result<Self, ConfigError> {
        let bindings = configured_shortcuts()
            .into_iter()
            .map(|(key_combo, action, label)| ShortcutBinding {
                key_combo: key_combo.to_string(),
                action,
                label: label.to_string(),
            })
            .collect();
        Self::new(bindings)
    }

    pub fn lookup(&self, key_combo: &str) -> Option<&ShortcutBinding> {
        self.bindings.iter().find(|b| b.key_combo == key_combo)
    }

    /// Action bound to a key event, if any.
    ///
    /// Events inside text fields never match. The caller prevents the
    /// browser default and runs the action once when this returns `Some`.
    pub fn dispatch(&self, input: &KeyInput) -> Option<&Action> {
        let combo = normalize(input)?;
        self.lookup(&combo).map(|b| &b.action)
    }

    /// `(key_combo, label)` pairs for the help overlay.
    pub fn help_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|b| (b.key_combo.as_str(), b.label.as_str()))
    }
}
