//! Blinking caret for the text field.
//!
//! The caret never stores the character underneath it: the field passes the
//! character in at render time, since the text itself lives in the form.
//!
//! ```rust
//! use bubbletea_form_input::cursor;
//!
//! let mut caret = cursor::new();
//! let _ = caret.focus();
//! assert!(caret.focused());
//! assert!(!caret.render('x').is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Ensures blink messages are only handled by the caret that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that flips the caret between shown and hidden.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Caret the message targets.
    pub id: usize,
    /// Sequence tag; only the most recent tag is honoured.
    pub tag: usize,
}

/// How the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Alternates between shown and hidden.
    Blink,
    /// Always shown while focused.
    Static,
    /// Never shown.
    Hide,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Blink => "blink",
            Mode::Static => "static",
            Mode::Hide => "hidden",
        })
    }
}

/// Caret state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between blinks.
    pub blink_speed: Duration,
    /// Style of the caret block.
    pub style: Style,
    /// Style of the character while the caret is hidden.
    pub text_style: Style,

    id: usize,
    focus: bool,
    hidden: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            id: next_id(),
            focus: false,
            hidden: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates an unfocused blinking caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles blink messages addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let blink = msg.downcast_ref::<BlinkMsg>()?;
        if self.mode != Mode::Blink || !self.focus {
            return None;
        }
        if blink.id != self.id || blink.tag != self.blink_tag {
            return None;
        }

        self.hidden = !self.hidden;
        self.blink_cmd()
    }

    /// The caret mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the caret mode, returning the first blink when blinking.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.hidden = mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink && self.focus {
            return self.blink_cmd();
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }

        self.blink_tag += 1;
        let tag = self.blink_tag;
        let id = self.id;
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Shows the caret and starts blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.hidden = self.mode == Mode::Hide;
        self.blink_cmd()
    }

    /// Hides the caret.
    pub fn blur(&mut self) {
        self.focus = false;
        self.hidden = true;
    }

    /// Whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Whether the caret block is currently drawn.
    pub fn visible(&self) -> bool {
        self.focus && !self.hidden
    }

    /// Renders `ch` with the caret over it.
    pub fn render(&self, ch: char) -> String {
        let s = ch.to_string();
        if self.visible() {
            self.style.clone().inline(true).reverse(true).render(&s)
        } else {
            self.text_style.clone().inline(true).render(&s)
        }
    }
}

/// Creates a caret. Same as `Model::new()`.
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_tags_advance() {
        let mut m = Model::new();
        m.blink_speed = Duration::from_millis(10);
        let _first = m.focus();
        let first_tag = m.blink_tag;
        let _second = m.blink_cmd();
        assert_ne!(first_tag, m.blink_tag);
    }

    #[test]
    fn test_stale_blink_ignored() {
        let mut m = Model::new();
        let _ = m.focus();
        let shown = m.visible();

        let stale: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.blink_tag + 5,
        });
        assert!(m.update(&stale).is_none());
        assert_eq!(m.visible(), shown);

        let current: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.blink_tag,
        });
        assert!(m.update(&current).is_some());
        assert_ne!(m.visible(), shown);
    }

    #[test]
    fn test_blur_hides() {
        let mut m = Model::new();
        let _ = m.focus();
        assert!(m.visible());
        m.blur();
        assert!(!m.visible());
        assert_eq!(m.mode().to_string(), "blink");
    }
}
