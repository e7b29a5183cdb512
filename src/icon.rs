//! Icons used as input decorations.
//!
//! An icon is either a name looked up in a small glyph table, or a node the
//! caller has already rendered (any string, styled or not), which is shown
//! unchanged.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

static GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("visibility", "◉"),
        ("visibility_off", "◌"),
        ("search", "⌕"),
        ("email", "@"),
        ("lock", "🔒"),
        ("person", "☺"),
        ("phone", "☎"),
        ("calendar", "▦"),
        ("clock", "◷"),
        ("link", "🔗"),
        ("close", "✕"),
        ("check", "✓"),
        ("info", "ⓘ"),
        ("warning", "⚠"),
    ])
});

/// A decoration shown before or after the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// A named icon, resolved through the glyph table.
    Named(String),
    /// Pre-rendered content, displayed as is.
    Node(String),
}

impl Icon {
    /// Creates a named icon.
    pub fn named(name: impl Into<String>) -> Self {
        Icon::Named(name.into())
    }

    /// Creates an icon from already rendered content.
    pub fn node(content: impl Into<String>) -> Self {
        Icon::Node(content.into())
    }

    /// Renders the icon. Unknown names render as the name itself.
    pub fn render(&self) -> String {
        match self {
            Icon::Named(name) => glyph(name).unwrap_or(name.as_str()).to_string(),
            Icon::Node(content) => content.clone(),
        }
    }

    /// Display width of the rendered icon in terminal cells.
    pub fn width(&self) -> usize {
        let rendered = self.render();
        lipgloss_extras::lipgloss::strip_ansi(&rendered).width()
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::named(name)
    }
}

/// Looks up the glyph registered for an icon name.
pub fn glyph(name: &str) -> Option<&'static str> {
    GLYPHS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_icon_uses_glyph() {
        assert_eq!(Icon::named("search").render(), "⌕");
        assert_eq!(Icon::named("lock").width(), 2);
    }

    #[test]
    fn test_unknown_name_renders_verbatim() {
        assert_eq!(Icon::named("kiwi").render(), "kiwi");
    }

    #[test]
    fn test_node_is_unchanged() {
        let node = Icon::node("\x1b[1m$\x1b[0m");
        assert_eq!(node.render(), "\x1b[1m$\x1b[0m");
        assert_eq!(node.width(), 1);
    }
}
