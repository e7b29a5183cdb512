//! Message handling for the text field.

use super::editing::Editor;
use super::model::{paste, Model};
use super::props::Props;
use super::types::{AdornmentClickMsg, AdornmentPosition, PasteErrMsg, PasteMsg, Response};
use crate::key::matches_binding;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

impl Model {
    /// Handles a message against the current props.
    ///
    /// Disabled fields ignore everything. Pointer activation of the end
    /// decoration is honoured whether or not the field is focused, and never
    /// changes focus. Read-only fields move the caret but report no edits.
    pub fn update(&mut self, msg: &Msg, props: &Props) -> Response {
        let mut response = Response::default();
        if props.disabled {
            return response;
        }

        if let Some(click) = msg.downcast_ref::<AdornmentClickMsg>() {
            response.end_adornment_activated = click.id == props.id
                && click.position == AdornmentPosition::End
                && props.end_adornment.is_some();
            return response;
        }

        if !self.focus {
            return response;
        }

        response.cmd = self.cursor.update(msg);

        let mut editor = Editor::new(&props.value, self.pos, props.input_type.is_masked());

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg, props, &mut editor, &mut response);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            if !props.read_only {
                let runes: Vec<char> = paste_msg
                    .0
                    .chars()
                    .filter(|&c| props.input_type.accepts(c) || (props.multiline && c == '\n'))
                    .collect();
                editor.insert(&runes);
            }
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            debug!(field = %props.id, error = %paste_err.0, "paste failed");
        }

        self.pos = editor.pos;
        let text = editor.text();
        if text != props.value {
            self.suggestion_index = 0;
            response.value = Some(text);
        }
        response
    }

    fn handle_key(
        &mut self,
        key_msg: &KeyMsg,
        props: &Props,
        editor: &mut Editor,
        response: &mut Response,
    ) {
        if matches_binding(key_msg, &self.key_map.toggle_end_adornment) {
            response.end_adornment_activated = props.end_adornment.is_some();
            return;
        }

        if props.suggestions_enabled() {
            if matches_binding(key_msg, &self.key_map.accept_suggestion) {
                if let Some(suggestion) = self.current_suggestion(props) {
                    if !props.read_only {
                        editor.replace_all(suggestion.chars().collect());
                    }
                }
                return;
            }
            if matches_binding(key_msg, &self.key_map.next_suggestion) {
                self.next_suggestion(props);
                return;
            }
            if matches_binding(key_msg, &self.key_map.prev_suggestion) {
                self.previous_suggestion(props);
                return;
            }
        }

        if matches_binding(key_msg, &self.key_map.paste) {
            if !props.read_only {
                response.cmd = Some(paste());
            }
            return;
        }

        if !props.read_only && self.handle_deletion(key_msg, editor) {
            return;
        }

        if self.handle_movement(key_msg, props, editor) {
            return;
        }

        if props.read_only {
            return;
        }

        if props.multiline && matches_binding(key_msg, &self.key_map.insert_newline) {
            editor.insert(&['\n']);
            return;
        }

        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
                && props.input_type.accepts(ch)
            {
                editor.insert(&[ch]);
            }
        }
    }

    fn handle_deletion(&self, key_msg: &KeyMsg, editor: &mut Editor) -> bool {
        let keys = &self.key_map;
        if matches_binding(key_msg, &keys.delete_word_backward) {
            editor.delete_word_backward();
        } else if matches_binding(key_msg, &keys.delete_character_backward) {
            editor.delete_backward();
        } else if matches_binding(key_msg, &keys.delete_character_forward) {
            editor.delete_forward();
        } else if matches_binding(key_msg, &keys.delete_after_cursor) {
            editor.delete_after_cursor();
        } else if matches_binding(key_msg, &keys.delete_before_cursor) {
            editor.delete_before_cursor();
        } else if matches_binding(key_msg, &keys.delete_word_forward) {
            editor.delete_word_forward();
        } else {
            return false;
        }
        true
    }

    fn handle_movement(&self, key_msg: &KeyMsg, props: &Props, editor: &mut Editor) -> bool {
        let keys = &self.key_map;
        if matches_binding(key_msg, &keys.word_backward) {
            editor.word_backward();
        } else if matches_binding(key_msg, &keys.character_backward) {
            editor.left();
        } else if matches_binding(key_msg, &keys.word_forward) {
            editor.word_forward();
        } else if matches_binding(key_msg, &keys.character_forward) {
            editor.right();
        } else if matches_binding(key_msg, &keys.line_start) {
            editor.home();
        } else if matches_binding(key_msg, &keys.line_end) {
            editor.end();
        } else if props.multiline && matches_binding(key_msg, &keys.line_previous) {
            editor.line_up();
        } else if props.multiline && matches_binding(key_msg, &keys.line_next) {
            editor.line_down();
        } else {
            return false;
        }
        true
    }

    /// Suggestions that extend the current value, case-insensitively.
    pub fn matched_suggestions<'a>(&self, props: &'a Props) -> Vec<&'a str> {
        if props.value.is_empty() || !props.suggestions_enabled() {
            return Vec::new();
        }
        let current = props.value.to_lowercase();
        props
            .suggestions
            .iter()
            .filter(|s| {
                s.to_lowercase().starts_with(&current)
                    && s.chars().count() > props.value.chars().count()
            })
            .map(String::as_str)
            .collect()
    }

    /// The suggestion that `accept_suggestion` would insert.
    pub fn current_suggestion<'a>(&self, props: &'a Props) -> Option<&'a str> {
        let matched = self.matched_suggestions(props);
        if matched.is_empty() {
            return None;
        }
        Some(matched[self.suggestion_index % matched.len()])
    }

    fn next_suggestion(&mut self, props: &Props) {
        let count = self.matched_suggestions(props).len();
        if count > 0 {
            self.suggestion_index = (self.suggestion_index + 1) % count;
        }
    }

    fn previous_suggestion(&mut self, props: &Props) {
        let count = self.matched_suggestions(props).len();
        if count > 0 {
            self.suggestion_index = (self.suggestion_index + count - 1) % count;
        }
    }
}
