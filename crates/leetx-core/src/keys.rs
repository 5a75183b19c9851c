//! Keyboard event normalization.
//!
//! Turns a raw key-up event into the canonical combo string used as the
//! shortcut table key, e.g. `"Ctrl + Shift + K"`.

/// Modifier separator inside a canonical combo.
pub const SEPARATOR: &str = " + ";

/// Where a key event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    /// `<input>` or `<textarea>`; shortcuts never fire here.
    TextField,
    #[default]
    Other,
}

/// A browser keyboard event reduced to what dispatch needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    /// `KeyboardEvent.key` as reported by the browser.
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub target: KeyTarget,
}

impl KeyInput {
    /// Unmodified key press outside any text field.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn in_text_field(mut self) -> Self {
        self.target = KeyTarget::TextField;
        self
    }
}

/// Canonical combo for an event, or `None` when typing into a text field.
///
/// Modifiers are emitted in fixed order Ctrl, Shift, Alt, followed by the
/// key name from [`canonical_key_name`].
pub fn normalize(input: &KeyInput) -> Option<String> {
    if input.target == KeyTarget::TextField {
        return None;
    }

    let mut parts: Vec<String> = Vec::with_capacity(4);
    if input.ctrl {
        parts.push("Ctrl".to_string());
    }
    if input.shift {
        parts.push("Shift".to_string());
    }
    if input.alt {
        parts.push("Alt".to_string());
    }
    parts.push(canonical_key_name(&input.key));

    Some(parts.join(SEPARATOR))
}

/// Canonical display name of a single key.
///
/// - single characters are upper-cased (`"f"` -> `"F"`)
/// - the space bar is `"Space"`
/// - function keys `F1`..`F12` pass through
/// - other named keys get an upper-cased first character and keep the rest
///   verbatim, so `"ArrowUp"` and `"PageDown"` survive intact
pub fn canonical_key_name(key: &str) -> String {
    if key == " " {
        return "Space".to_string();
    }

    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    if chars.as_str().is_empty() {
        return first.to_uppercase().collect();
    }

    if is_function_key(key) {
        return key.to_string();
    }

    let mut name: String = first.to_uppercase().collect();
    name.push_str(chars.as_str());
    name
}

fn is_function_key(key: &str) -> bool {
    key.strip_prefix('F')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=12).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_letter() {
        let input = KeyInput::plain("f").with_shift();
        assert_eq!(normalize(&input).as_deref(), Some("Shift + F"));
    }

    #[test]
    fn test_modifier_order_is_fixed() {
        let input = KeyInput {
            ctrl: true,
            alt: true,
            ..KeyInput::plain("k").with_shift()
        };
        assert_eq!(normalize(&input).as_deref(), Some("Ctrl + Shift + Alt + K"));
    }

    #[test]
    fn test_named_keys_keep_inner_casing() {
        assert_eq!(canonical_key_name("ArrowUp"), "ArrowUp");
        assert_eq!(canonical_key_name("ArrowDown"), "ArrowDown");
        assert_eq!(canonical_key_name("PageDown"), "PageDown");
        assert_eq!(canonical_key_name("Escape"), "Escape");
        assert_eq!(canonical_key_name("escape"), "Escape");
        assert_eq!(canonical_key_name("Enter"), "Enter");
    }

    #[test]
    fn test_space_and_function_keys() {
        assert_eq!(canonical_key_name(" "), "Space");
        assert_eq!(canonical_key_name("F1"), "F1");
        assert_eq!(canonical_key_name("F12"), "F12");
        assert_eq!(canonical_key_name("F"), "F");
        assert_eq!(
            normalize(&KeyInput {
                ctrl: true,
                ..KeyInput::plain("F5")
            })
            .as_deref(),
            Some("Ctrl + F5")
        );
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(canonical_key_name("a"), "A");
        assert_eq!(canonical_key_name("?"), "?");
        assert_eq!(canonical_key_name("ß"), "SS");
        assert_eq!(canonical_key_name(""), "");
    }

    #[test]
    fn test_text_field_is_ignored() {
        let input = KeyInput::plain("f").in_text_field();
        assert_eq!(normalize(&input), None);

        let input = KeyInput::plain("F").with_shift().in_text_field();
        assert_eq!(normalize(&input), None);
    }
}
