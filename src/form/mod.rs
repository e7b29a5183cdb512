//! Form state and validation engine.
//!
//! A [`Form`] tracks the value, touched/dirty flags and validation error of
//! every registered field. Each field carries a [`RuleSet`]: an ordered list
//! of declarative [`Rule`]s that the form evaluates when its [`Mode`] asks
//! for it, when a field is triggered explicitly, or on submit.
//!
//! # Async validators
//!
//! A [`Validator::Async`] rule does not block. The form wraps its future in a
//! bubbletea command; pass the resulting message back to [`Form::update`] to
//! store the outcome. Results for a value that has since been validated
//! again are dropped.
//!
//! ```rust
//! use bubbletea_form_input::form::{Form, Rule, RuleSet, Submission};
//!
//! let mut form = Form::new();
//! form.register(
//!     "code",
//!     "abc",
//!     RuleSet::new().with(Rule::Pattern {
//!         regex: regex::Regex::new(r"^[0-9]+$").unwrap(),
//!         message: "digits only".into(),
//!     }),
//! )
//! .unwrap();
//!
//! match form.submit() {
//!     Submission::Invalid(names) => assert_eq!(names, vec!["code".to_string()]),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(form.error("code").unwrap().message, "digits only");
//! ```

pub mod model;
pub mod rules;
pub mod types;


pub use model::Form;
pub use rules::{
    AsyncValidateFunc, Outcome, Rule, RuleKind, RuleSet, SyncValidateFunc, ValidateFuture,
    Validator,
};
pub use types::{FieldError, FormEvent, Mode, Submission, SubmitValidatedMsg, ValidatedMsg, Values};
