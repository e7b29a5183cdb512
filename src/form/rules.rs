//! Declarative validation rules and their evaluation.

use super::types::FieldError;
use regex::Regex;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by an asynchronous validator.
pub type ValidateFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

/// Synchronous validator. `Err` carries the message to display.
pub type SyncValidateFunc = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Asynchronous validator. Receives an owned copy of the value.
pub type AsyncValidateFunc = Arc<dyn Fn(String) -> ValidateFuture + Send + Sync>;

/// A caller-supplied validation function.
#[derive(Clone)]
pub enum Validator {
    /// Completes immediately.
    Sync(SyncValidateFunc),
    /// Completes later, through a command.
    Async(AsyncValidateFunc),
}

impl Validator {
    /// Wraps a synchronous validation function.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        Validator::Sync(Arc::new(f))
    }

    /// Wraps an asynchronous validation function.
    ///
    /// ```rust
    /// use bubbletea_form_input::form::Validator;
    ///
    /// let taken = Validator::new_async(|name: String| async move {
    ///     if name == "admin" {
    ///         Err("Username is taken".to_string())
    ///     } else {
    ///         Ok(())
    ///     }
    /// });
    /// assert!(taken.is_async());
    /// ```
    pub fn new_async<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        Validator::Async(Arc::new(move |value| Box::pin(f(value))))
    }

    /// Whether this validator completes through a command.
    pub fn is_async(&self) -> bool {
        matches!(self, Validator::Async(_))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Sync(_) => f.write_str("Validator::Sync(..)"),
            Validator::Async(_) => f.write_str("Validator::Async(..)"),
        }
    }
}

/// Identifies which kind of rule produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Value must be present.
    Required,
    /// Value must have at least N characters.
    MinLength,
    /// Value must have at most N characters.
    MaxLength,
    /// Value must match a regular expression.
    Pattern,
    /// Caller-supplied validator.
    Validate,
}

/// One constraint on a field value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fails on an empty value.
    Required {
        /// Message shown on failure.
        message: String,
    },
    /// Fails when a non-empty value has fewer characters than `value`.
    MinLength {
        /// Minimum character count.
        value: usize,
        /// Message shown on failure.
        message: String,
    },
    /// Fails when a value has more characters than `value`.
    MaxLength {
        /// Maximum character count.
        value: usize,
        /// Message shown on failure.
        message: String,
    },
    /// Fails when a non-empty value does not match `regex`.
    Pattern {
        /// Expression the value must match.
        regex: Regex,
        /// Message shown on failure.
        message: String,
    },
    /// Delegates to a caller-supplied function.
    Validate(Validator),
}

impl Rule {
    /// The kind of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required { .. } => RuleKind::Required,
            Rule::MinLength { .. } => RuleKind::MinLength,
            Rule::MaxLength { .. } => RuleKind::MaxLength,
            Rule::Pattern { .. } => RuleKind::Pattern,
            Rule::Validate(_) => RuleKind::Validate,
        }
    }

    /// Failure message for the declarative rules. Validators produce theirs
    /// at runtime and return `None`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Pattern { message, .. } => Some(message),
            Rule::Validate(_) => None,
        }
    }
}

/// Result of checking a value against a rule set.
pub enum Outcome {
    /// Every rule passed.
    Valid,
    /// A synchronous rule failed.
    Invalid(FieldError),
    /// Synchronous rules passed; async validators still have to run.
    Pending(ValidateFuture),
}

/// Ordered list of rules for one field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Appends a rule, builder style.
    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Kinds of all rules, in order.
    pub fn kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(Rule::kind).collect()
    }

    /// First rule of the given kind.
    pub fn find(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.iter().find(|r| r.kind() == kind)
    }

    /// Checks a value.
    ///
    /// Synchronous rules run in order and the first failure wins. Async
    /// validators only run once every synchronous rule has passed; they are
    /// chained in order into a single future.
    pub fn check(&self, value: &str) -> Outcome {
        let empty = value.is_empty();
        let len = value.chars().count();
        let mut pending: Vec<AsyncValidateFunc> = Vec::new();

        for rule in &self.rules {
            let failed = match rule {
                Rule::Required { message } => empty.then(|| message.clone()),
                Rule::MinLength { value: min, message } => {
                    (!empty && len < *min).then(|| message.clone())
                }
                Rule::MaxLength { value: max, message } => {
                    (!empty && len > *max).then(|| message.clone())
                }
                Rule::Pattern { regex, message } => {
                    (!empty && !regex.is_match(value)).then(|| message.clone())
                }
                Rule::Validate(Validator::Sync(f)) => f(value).err(),
                Rule::Validate(Validator::Async(f)) => {
                    pending.push(Arc::clone(f));
                    None
                }
            };

            if let Some(message) = failed {
                return Outcome::Invalid(FieldError::new(rule.kind(), message));
            }
        }

        if pending.is_empty() {
            return Outcome::Valid;
        }

        let value = value.to_string();
        Outcome::Pending(Box::pin(async move {
            for validate in pending {
                validate(value.clone()).await?;
            }
            Ok(())
        }))
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}
