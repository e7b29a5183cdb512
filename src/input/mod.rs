//! Form-bound text input.
//!
//! An input connects one [`crate::textfield`] widget to one field of a
//! [`crate::form::Form`]. Its [`FieldConfig`] turns into the form's rule
//! list ([`build_rules`]), the value shown is always the form's value, and
//! the validation error is drawn as helper text. Password fields get a
//! reveal toggle in the trailing slot, bound to `ctrl+r` and to pointer
//! clicks delivered as [`crate::textfield::AdornmentClickMsg`].
//!
//! ```rust
//! use bubbletea_form_input::form::{Form, Submission};
//! use bubbletea_form_input::input::{self, FieldConfig};
//! use bubbletea_form_input::textfield::InputType;
//!
//! let mut form = Form::new();
//! let mut password = input::new(
//!     FieldConfig::new("password", "Password")
//!         .with_input_type(InputType::Password)
//!         .with_required(true),
//!     &mut form,
//! )
//! .unwrap();
//!
//! assert!(matches!(form.submit(), Submission::Invalid(_)));
//! assert!(password.view(&form).contains("Password is required"));
//!
//! password.toggle_reveal();
//! assert_eq!(password.input_type(), InputType::Text);
//! ```

pub mod config;
pub mod model;
pub mod rules;
pub mod schema;

#[cfg(test)]
mod tests;

pub use config::{FieldConfig, Multiline, Pattern, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use model::{new, Model};
pub use rules::{build_rules, resolve_input_type};
pub use schema::{FieldSchema, PatternSchema};
