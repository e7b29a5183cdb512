//! Controlled text-entry control.
//!
//! The text field draws a labelled input box with optional decorations and
//! helper text, and turns key presses into edits. It is *controlled*: the
//! value comes in through [`Props`] and edits go out through
//! [`Response::value`]. Whoever owns the value decides what to keep.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_form_input::textfield::{self, InputType, Props};
//!
//! let mut field = textfield::new();
//! let _ = field.focus();
//!
//! let props = Props::new("pin", "PIN")
//!     .with_value("1234")
//!     .with_input_type(InputType::Password);
//!
//! let view = field.view(&props);
//! assert!(view.contains("PIN"));
//! assert!(!view.contains("1234"));
//! ```
//!
//! # Multiline
//!
//! [`Props::with_rows`] switches to multiline editing: `enter` inserts a line
//! break, `up`/`down` move between lines. A fixed row count wins over a
//! maximum; without either the box grows with the content.

mod editing;
pub mod keymap;
pub mod model;
pub mod props;
pub mod types;
mod update;
mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model, DEFAULT_CONTAINER_WIDTH};
pub use props::{Props, DEFAULT_WIDTH};
pub use types::{
    Adornment, AdornmentClickMsg, AdornmentPosition, AutoComplete, InputType, PasteErrMsg,
    PasteMsg, Response, Size, Variant,
};
