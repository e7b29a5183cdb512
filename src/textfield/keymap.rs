//! Key bindings for the text field.

use super::types::Adornment;
use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Key bindings for editing, suggestions and the end decoration.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move caret one character right.
    pub character_forward: Binding,
    /// Move caret one character left.
    pub character_backward: Binding,
    /// Move caret one word right.
    pub word_forward: Binding,
    /// Move caret one word left.
    pub word_backward: Binding,
    /// Move caret one line up (multiline only).
    pub line_previous: Binding,
    /// Move caret one line down (multiline only).
    pub line_next: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete the next word.
    pub delete_word_forward: Binding,
    /// Delete from the caret to the end of the line.
    pub delete_after_cursor: Binding,
    /// Delete from the start of the line to the caret.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Insert a line break (multiline only).
    pub insert_newline: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
    /// Accept the current suggestion.
    pub accept_suggestion: Binding,
    /// Move to the next suggestion.
    pub next_suggestion: Binding,
    /// Move to the previous suggestion.
    pub prev_suggestion: Binding,
    /// Activate the end decoration, e.g. the password reveal toggle.
    pub toggle_end_adornment: Binding,
}

/// Default bindings, following readline conventions.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        line_previous: new_binding(vec![with_keys_str(&["up"])]),
        line_next: new_binding(vec![with_keys_str(&["down"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_word_forward: new_binding(vec![with_keys_str(&["alt+delete", "alt+d"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        insert_newline: new_binding(vec![with_keys_str(&["enter"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
        accept_suggestion: new_binding(vec![
            with_keys_str(&["tab"]),
            with_help("tab", "accept suggestion"),
        ]),
        next_suggestion: new_binding(vec![with_keys_str(&["ctrl+n"])]),
        prev_suggestion: new_binding(vec![with_keys_str(&["ctrl+p"])]),
        toggle_end_adornment: new_binding(vec![
            with_keys_str(&["ctrl+r"]),
            with_help("ctrl+r", Adornment::TOGGLE_LABEL),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.accept_suggestion, &self.toggle_end_adornment]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.accept_suggestion, &self.paste],
            vec![&self.toggle_end_adornment],
        ]
    }
}
