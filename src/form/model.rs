//! The form state container.

use super::rules::{Outcome, RuleKind, RuleSet, ValidateFuture};
use super::types::{
    FieldError, FormEvent, Mode, Submission, SubmitValidatedMsg, ValidatedMsg, Values,
};
use crate::error::{FormError, Result};
use bubbletea_rs::{Cmd, Msg};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

#[derive(Debug)]
struct FieldState {
    value: String,
    default: String,
    rules: RuleSet,
    touched: bool,
    dirty: bool,
    validating: bool,
    generation: u64,
}

/// Shared state for a group of fields.
///
/// The form owns every registered field's value, its touched/dirty flags and
/// its current validation error. Components read from it and forward edits
/// and blur notifications to it.
///
/// ```rust
/// use bubbletea_form_input::form::{Form, Mode, Rule, RuleSet};
///
/// let mut form = Form::with_mode(Mode::OnChange);
/// let rules = RuleSet::new().with(Rule::Required {
///     message: "Name is required".into(),
/// });
/// form.register("name", "", rules).unwrap();
///
/// let _ = form.set_value("name", "");
/// assert_eq!(form.error("name").unwrap().message, "Name is required");
///
/// let _ = form.set_value("name", "Ada");
/// assert!(form.error("name").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Form {
    mode: Mode,
    fields: BTreeMap<String, FieldState>,
    errors: HashMap<String, FieldError>,
    submit_count: u32,
    submission: u64,
}

impl Form {
    /// Creates a form that validates on submit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with the given validation mode.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// The validation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Registers a field, or replaces the rules of an existing one.
    ///
    /// A field that is already registered keeps its current value.
    pub fn register(&mut self, name: &str, default: &str, rules: RuleSet) -> Result<()> {
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        if let Some(field) = self.fields.get_mut(name) {
            debug!(field = name, rules = rules.len(), "re-registered field");
            field.rules = rules;
            return Ok(());
        }

        debug!(field = name, rules = rules.len(), "registered field");
        self.fields.insert(
            name.to_string(),
            FieldState {
                value: default.to_string(),
                default: default.to_string(),
                rules,
                touched: false,
                dirty: false,
                validating: false,
                generation: 0,
            },
        );
        Ok(())
    }

    /// Removes a field and its error.
    pub fn unregister(&mut self, name: &str) -> Result<()> {
        if self.fields.remove(name).is_none() {
            return Err(FormError::UnknownField {
                name: name.to_string(),
            });
        }
        self.errors.remove(name);
        Ok(())
    }

    /// Whether a field is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of all registered fields, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Rules registered for a field.
    pub fn rules(&self, name: &str) -> Option<&RuleSet> {
        self.fields.get(name).map(|f| &f.rules)
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    /// All values, keyed by field name.
    pub fn values(&self) -> Values {
        self.fields
            .iter()
            .map(|(name, f)| (name.clone(), f.value.clone()))
            .collect()
    }

    /// Sets a field's value, validating it if the mode asks for it.
    ///
    /// Unknown fields are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Option<Cmd> {
        let revalidate = self.submit_count > 0;
        let mode = self.mode;
        let Some(field) = self.fields.get_mut(name) else {
            warn!(field = name, "set_value on unregistered field");
            return None;
        };

        field.value = value.into();
        field.dirty = field.value != field.default;

        let validate = revalidate
            || match mode {
                Mode::OnChange | Mode::All => true,
                Mode::OnTouched => field.touched,
                Mode::OnSubmit | Mode::OnBlur => false,
            };

        if validate {
            self.trigger(name)
        } else {
            None
        }
    }

    /// Records that a field lost focus, validating it if the mode asks for it.
    pub fn blur(&mut self, name: &str) -> Option<Cmd> {
        let mode = self.mode;
        let Some(field) = self.fields.get_mut(name) else {
            warn!(field = name, "blur on unregistered field");
            return None;
        };
        field.touched = true;

        if matches!(mode, Mode::OnBlur | Mode::OnTouched | Mode::All) {
            self.trigger(name)
        } else {
            None
        }
    }

    /// Validates one field now.
    ///
    /// Returns a command when async validators have to run; the error is
    /// updated once its [`ValidatedMsg`] is passed to [`Form::update`].
    pub fn trigger(&mut self, name: &str) -> Option<Cmd> {
        let (generation, future) = self.check_field(name)?;
        let name = name.to_string();
        let cmd: Cmd = Box::pin(async move {
            let result = future.await;
            Some(Box::new(ValidatedMsg {
                name,
                generation,
                result,
            }) as Msg)
        });
        Some(cmd)
    }

    /// Validates every field.
    pub fn submit(&mut self) -> Submission {
        self.submit_count += 1;
        self.submission += 1;

        let names: Vec<String> = self.fields.keys().cloned().collect();
        let mut pending: Vec<(String, u64, ValidateFuture)> = Vec::new();
        for name in names {
            if let Some((generation, future)) = self.check_field(&name) {
                pending.push((name, generation, future));
            }
        }

        if pending.is_empty() {
            let outcome = self.submit_outcome();
            debug!(submit = self.submit_count, valid = outcome.is_ok(), "submitted form");
            return match outcome {
                Ok(values) => Submission::Valid(values),
                Err(names) => Submission::Invalid(names),
            };
        }

        let submission = self.submission;
        let cmd: Cmd = Box::pin(async move {
            let mut results = Vec::with_capacity(pending.len());
            for (name, generation, future) in pending {
                results.push(ValidatedMsg {
                    name,
                    generation,
                    result: future.await,
                });
            }
            Some(Box::new(SubmitValidatedMsg {
                submission,
                results,
            }) as Msg)
        });
        Submission::Pending(cmd)
    }

    /// Applies async validation results.
    pub fn update(&mut self, msg: &Msg) -> Option<FormEvent> {
        if let Some(validated) = msg.downcast_ref::<ValidatedMsg>() {
            if !self.apply(validated) {
                return None;
            }
            return Some(FormEvent::Validated {
                name: validated.name.clone(),
                error: self.errors.get(&validated.name).cloned(),
            });
        }

        if let Some(submitted) = msg.downcast_ref::<SubmitValidatedMsg>() {
            if submitted.submission != self.submission {
                trace!(submission = submitted.submission, "dropped stale submit result");
                return None;
            }
            for result in &submitted.results {
                self.apply(result);
            }
            return Some(FormEvent::Submitted(self.submit_outcome()));
        }

        None
    }

    /// The current error of a field.
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// All current errors, keyed by field name.
    pub fn errors(&self) -> &HashMap<String, FieldError> {
        &self.errors
    }

    /// Sets an error from outside the rule set, e.g. one returned by a server.
    pub fn set_error(&mut self, name: &str, message: impl Into<String>) -> Result<()> {
        if !self.fields.contains_key(name) {
            return Err(FormError::UnknownField {
                name: name.to_string(),
            });
        }
        self.errors
            .insert(name.to_string(), FieldError::new(RuleKind::Validate, message));
        Ok(())
    }

    /// Clears a field's error.
    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    /// Whether no field has an error or a pending validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && !self.fields.values().any(|f| f.validating)
    }

    /// Whether the field has lost focus at least once.
    pub fn is_touched(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.touched)
    }

    /// Whether the field's value differs from its default.
    pub fn is_dirty(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.dirty)
    }

    /// Whether an async validation is running for the field.
    pub fn is_validating(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.validating)
    }

    /// How many times [`Form::submit`] has been called since the last reset.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Restores defaults and clears errors, flags and pending validations.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value = field.default.clone();
            field.touched = false;
            field.dirty = false;
            field.validating = false;
            field.generation += 1;
        }
        self.errors.clear();
        self.submit_count = 0;
        self.submission += 1;
    }

    /// Runs the synchronous rules of a field and records the outcome.
    ///
    /// Returns the generation and future when async validators remain.
    fn check_field(&mut self, name: &str) -> Option<(u64, ValidateFuture)> {
        let field = self.fields.get_mut(name)?;
        field.generation += 1;

        match field.rules.check(&field.value) {
            Outcome::Valid => {
                field.validating = false;
                self.errors.remove(name);
                None
            }
            Outcome::Invalid(error) => {
                debug!(field = name, kind = ?error.kind, "validation failed");
                field.validating = false;
                self.errors.insert(name.to_string(), error);
                None
            }
            Outcome::Pending(future) => {
                field.validating = true;
                Some((field.generation, future))
            }
        }
    }

    /// Applies one async result. Returns false when it is stale.
    fn apply(&mut self, msg: &ValidatedMsg) -> bool {
        let Some(field) = self.fields.get_mut(&msg.name) else {
            return false;
        };
        if field.generation != msg.generation {
            trace!(
                field = %msg.name,
                generation = msg.generation,
                current = field.generation,
                "dropped stale validation result"
            );
            return false;
        }

        field.validating = false;
        match &msg.result {
            Ok(()) => {
                self.errors.remove(&msg.name);
            }
            Err(message) => {
                debug!(field = %msg.name, "async validation failed");
                self.errors.insert(
                    msg.name.clone(),
                    FieldError::new(RuleKind::Validate, message.clone()),
                );
            }
        }
        true
    }

    /// Fields with an error or a validation still in flight count as invalid.
    fn submit_outcome(&self) -> std::result::Result<Values, Vec<String>> {
        let names: Vec<String> = self
            .fields
            .iter()
            .filter(|(name, field)| field.validating || self.errors.contains_key(*name))
            .map(|(name, _)| name.clone())
            .collect();
        if names.is_empty() {
            return Ok(self.values());
        }
        Err(names)
    }
}
