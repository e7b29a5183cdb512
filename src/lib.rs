#![warn(missing_docs)]

//! # bubbletea-form-input
//!
//! A form-bound text input for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, plus the small form engine it binds to.
//!
//! ## Overview
//!
//! - [`textfield`]: a controlled text-entry control. It draws a label, a
//!   boxed value with optional decorations and helper text, and reports
//!   edits without storing the value itself.
//! - [`form`]: registered fields, declarative validation rules, validation
//!   modes, touched/dirty tracking and submit.
//! - [`input`]: binds one text field to one form field. Its configuration
//!   becomes the field's rules, the form's error becomes helper text, and
//!   password fields get a visibility toggle.
//! - [`icon`]: named glyphs and caller-supplied decorations.
//! - [`key`]: type-safe key bindings.
//!
//! ## Focus Management
//!
//! Focusable parts implement [`Component`]:
//!
//! ```rust
//! use bubbletea_form_input::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut field = textfield_new();
//! handle_focus(&mut field);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The application owns the form and passes it to each input:
//!
//! ```rust
//! use bubbletea_form_input::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     form: Form,
//!     email: FormInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut form = Form::with_mode(Mode::OnBlur);
//!         let config = FieldConfig::new("email", "Email")
//!             .with_input_type(InputType::Email)
//!             .with_required(true);
//!         let mut email = input_new(config, &mut form).unwrap();
//!         let cmd = email.focus();
//!         (Self { form, email }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if self.form.update(&msg).is_some() {
//!             return None;
//!         }
//!         self.email.update(&msg, &mut self.form)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.email.view(&self.form)
//!     }
//! }
//! ```

pub mod cursor;
pub mod error;
pub mod form;
pub mod icon;
pub mod input;
pub mod key;
pub mod textfield;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command, such as the
///   caret blink.
/// - `blur()` clears it.
/// - `focused()` reports it.
///
/// ```rust
/// use bubbletea_form_input::prelude::*;
///
/// let mut field = textfield_new();
/// assert!(!field.focused());
///
/// let _ = field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use error::FormError;
pub use form::{FieldError, Form, FormEvent, Mode, Rule, RuleKind, RuleSet, Submission, Validator};
pub use icon::Icon;
pub use input::{
    build_rules, new as input_new, resolve_input_type, FieldConfig, FieldSchema,
    Model as FormInput, Multiline, Pattern,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use textfield::{
    default_key_map as textfield_default_key_map, new as textfield_new, paste, Adornment,
    AdornmentClickMsg, AdornmentPosition, AutoComplete, InputType, KeyMap as TextFieldKeyMap,
    Model as TextField, PasteErrMsg, PasteMsg, Props, Response, Size, Variant,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_form_input::prelude::*;
///
/// let mut form = Form::new();
/// let name = input_new(FieldConfig::new("name", "Name"), &mut form).unwrap();
/// assert!(!name.focused());
/// ```
pub mod prelude {
    pub use crate::Component;

    pub use crate::{
        build_rules, input_new, resolve_input_type, textfield_default_key_map, textfield_new,
        Adornment, AdornmentClickMsg, AdornmentPosition, AutoComplete, Cursor, FieldConfig,
        FieldError, FieldSchema, Form, FormError, FormEvent, FormInput, Icon, InputType, Mode,
        Multiline, Pattern, Props, Response, Rule, RuleKind, RuleSet, Size, Submission, TextField,
        TextFieldKeyMap, Validator, Variant,
    };

    pub use crate::key::{Binding, KeyMap};
}
