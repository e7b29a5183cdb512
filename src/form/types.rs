//! Core types for the form engine.

use super::rules::RuleKind;
use bubbletea_rs::{Cmd, Msg};
use std::collections::BTreeMap;

/// When fields are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only on submit. After the first submit, also on every change.
    #[default]
    OnSubmit,
    /// When a field loses focus.
    OnBlur,
    /// On every change.
    OnChange,
    /// On the first blur, then on every change.
    OnTouched,
    /// On blur and on every change.
    All,
}

/// The validation error currently held for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Which rule failed.
    pub kind: RuleKind,
    /// Text to show next to the field.
    pub message: String,
}

impl FieldError {
    /// Creates an error.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of an async validation for a single field.
#[derive(Debug, Clone)]
pub struct ValidatedMsg {
    /// Field the result belongs to.
    pub name: String,
    /// Validation generation the result was started for.
    pub generation: u64,
    /// `Err` carries the validator's message.
    pub result: Result<(), String>,
}

/// Results of the async validations started by a submit.
#[derive(Debug, Clone)]
pub struct SubmitValidatedMsg {
    /// Submit the results belong to.
    pub submission: u64,
    /// One entry per field that had async validators.
    pub results: Vec<ValidatedMsg>,
}

impl From<ValidatedMsg> for Msg {
    fn from(msg: ValidatedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<SubmitValidatedMsg> for Msg {
    fn from(msg: SubmitValidatedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Field values keyed by field name.
pub type Values = BTreeMap<String, String>;

/// What happened when the form processed a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An async validation finished for a field.
    Validated {
        /// The field.
        name: String,
        /// The error now held for it, if any.
        error: Option<FieldError>,
    },
    /// A submit finished validating. `Err` lists the invalid fields.
    Submitted(Result<Values, Vec<String>>),
}

/// Immediate outcome of [`super::Form::submit`].
pub enum Submission {
    /// Every field passed.
    Valid(Values),
    /// These fields failed.
    Invalid(Vec<String>),
    /// Async validators are running; the command resolves to a
    /// [`SubmitValidatedMsg`] that [`super::Form::update`] turns into
    /// [`FormEvent::Submitted`].
    Pending(Cmd),
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Submission::Valid(values) => f.debug_tuple("Valid").field(values).finish(),
            Submission::Invalid(names) => f.debug_tuple("Invalid").field(names).finish(),
            Submission::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
