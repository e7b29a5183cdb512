//! Key bindings shared by the widget and the field binder.
//!
//! Bindings are built from option values, the same way the keymaps in this
//! crate declare them:
//!
//! ```rust
//! use bubbletea_form_input::key;
//!
//! let reveal = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+r"]),
//!     key::with_help("ctrl+r", "show/hide password"),
//! ]);
//! assert!(reveal.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key description such as `"ctrl+w"`, `"alt+left"` or `"tab"`.
    ///
    /// Returns `None` for names that do not map to a crossterm key code.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Reports whether a key message is this key combination.
    ///
    /// Shift is ignored for character keys since it is already encoded in
    /// the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mask = match self.code {
            KeyCode::Char(_) => KeyModifiers::CONTROL | KeyModifiers::ALT,
            _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
        };
        (msg.modifiers & mask) == (self.modifiers & mask)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+r"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding from raw key codes without modifiers.
    pub fn new(codes: Vec<KeyCode>) -> Self {
        Self {
            keys: codes
                .into_iter()
                .map(|code| KeyPress {
                    code,
                    modifiers: KeyModifiers::NONE,
                })
                .collect(),
            ..Self::default()
        }
    }

    /// The key combinations this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Bindings without keys are never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from their textual names.
///
/// Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the keys of a binding directly.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Creates the binding in the disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether a key message triggers an enabled binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Reports whether a key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| matches_binding(msg, b))
}

/// Keymaps that can describe themselves for a help view.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings shown in the expanded help, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_modifiers() {
        let press = KeyPress::parse("ctrl+alt+x").unwrap();
        assert_eq!(press.code, KeyCode::Char('x'));
        assert!(press.modifiers.contains(KeyModifiers::CONTROL));
        assert!(press.modifiers.contains(KeyModifiers::ALT));

        assert_eq!(KeyPress::parse("shift+tab").unwrap().code, KeyCode::BackTab);
        assert!(KeyPress::parse("hyper").is_none());
    }

    #[test]
    fn test_matches_binding() {
        let b = new_binding(vec![with_keys_str(&["ctrl+w", "alt+backspace"])]);
        assert!(matches_binding(
            &key(KeyCode::Char('w'), KeyModifiers::CONTROL),
            &b
        ));
        assert!(matches_binding(
            &key(KeyCode::Backspace, KeyModifiers::ALT),
            &b
        ));
        assert!(!matches_binding(
            &key(KeyCode::Char('w'), KeyModifiers::NONE),
            &b
        ));
    }

    #[test]
    fn test_char_ignores_shift() {
        let b = new_binding(vec![with_keys_str(&["G"])]);
        assert!(matches_binding(
            &key(KeyCode::Char('G'), KeyModifiers::SHIFT),
            &b
        ));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["tab"]), with_disabled()]);
        let msg = key(KeyCode::Tab, KeyModifiers::NONE);
        assert!(!matches_binding(&msg, &b));

        b.set_enabled(true);
        assert!(matches(&msg, &[&b]));
    }

    #[test]
    fn test_with_keys_uses_presses_verbatim() {
        let press = KeyPress {
            code: KeyCode::F(2),
            modifiers: KeyModifiers::CONTROL,
        };
        let b = new_binding(vec![with_keys(vec![press])]);
        assert_eq!(b.keys(), &[press]);
        assert!(matches_binding(&key(KeyCode::F(2), KeyModifiers::CONTROL), &b));
        assert!(!matches_binding(&key(KeyCode::F(2), KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_help_text() {
        let b = new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "accept")]);
        assert_eq!(b.help().key, "tab");
        assert_eq!(b.help().desc, "accept");
    }
}
