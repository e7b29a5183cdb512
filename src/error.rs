//! Error type for form and field setup.
//!
//! Validation failures are not errors here: they are [`crate::form::FieldError`]
//! values stored in the form. `FormError` covers misuse of the API.

use thiserror::Error;

/// Errors returned while configuring or registering fields.
#[derive(Debug, Error)]
pub enum FormError {
    /// A pattern source did not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source as given.
        pattern: String,
        /// Why it failed to compile.
        #[source]
        source: regex::Error,
    },

    /// A field was registered without a name.
    #[error("field name must not be empty")]
    EmptyName,

    /// An operation named a field the form does not know.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The name that was looked up.
        name: String,
    },
}

/// Result alias for form setup operations.
pub type Result<T> = std::result::Result<T, FormError>;
