//! Interaction state of the text field.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::PasteErrMsg;
use crate::cursor::Model as Cursor;
use crate::Component;
use bubbletea_rs::{Cmd, Msg};
use std::time::Duration;

/// Default container width used by full-width fields.
pub const DEFAULT_CONTAINER_WIDTH: usize = 80;

/// A controlled text-entry control.
///
/// The model holds only what belongs to the interaction: focus, caret
/// position and the suggestion cursor. The text, label,
/// error state and decorations arrive as [`super::Props`] on every call to
/// `update` and `view`, and edits come back in a [`super::Response`].
///
/// ```rust
/// use bubbletea_form_input::textfield::{self, Props};
/// use bubbletea_rs::{KeyMsg, Msg};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut field = textfield::new();
/// let _ = field.focus();
///
/// let props = Props::new("name", "Name").with_value("Ad");
/// let key: Msg = Box::new(KeyMsg {
///     key: KeyCode::Char('a'),
///     modifiers: KeyModifiers::NONE,
/// });
/// let response = field.update(&key, &props);
/// assert_eq!(response.value.as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Caret.
    pub cursor: Cursor,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Character drawn for each masked character.
    pub echo_character: char,

    pub(super) focus: bool,
    pub(super) pos: usize,
    pub(super) suggestion_index: usize,
    pub(super) container_width: usize,
}

/// Creates an unfocused text field.
pub fn new() -> Model {
    Model {
        cursor: Cursor::new(),
        key_map: default_key_map(),
        echo_character: '*',
        focus: false,
        pos: usize::MAX,
        suggestion_index: 0,
        container_width: DEFAULT_CONTAINER_WIDTH,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Gives the field keyboard focus.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor.focus()
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Whether the field has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Caret position as a character index into `value`.
    ///
    /// A fresh field puts the caret at the end of whatever value it is
    /// first shown with.
    pub fn position(&self, value: &str) -> usize {
        self.pos.min(value.chars().count())
    }

    /// Moves the caret, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize, value: &str) {
        self.pos = pos.min(value.chars().count());
    }

    /// Width available to full-width fields, usually the terminal width.
    pub fn set_container_width(&mut self, width: usize) {
        self.container_width = width;
    }

    /// Width available to full-width fields.
    pub fn container_width(&self) -> usize {
        self.container_width
    }
}

/// Creates a command that reads the system clipboard.
///
/// Resolves to a [`PasteMsg`] on success or a [`PasteErrMsg`] otherwise.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
