//! Pure derivations from the field configuration.

use super::config::FieldConfig;
use crate::form::{Rule, RuleSet};
use crate::textfield::InputType;

/// The input type to display.
///
/// A revealed password is shown as plain text; every other combination
/// keeps the configured type.
pub fn resolve_input_type(configured: InputType, revealed: bool) -> InputType {
    if configured == InputType::Password && revealed {
        InputType::Text
    } else {
        configured
    }
}

/// Translates the configured constraints into the form's rule list.
///
/// Order: required, minimum length, maximum length, pattern, custom
/// validator. Constraints that are absent, or lengths of zero, add nothing.
pub fn build_rules(config: &FieldConfig) -> RuleSet {
    let label = &config.label;
    let mut rules = RuleSet::new();

    if config.required {
        rules.push(Rule::Required {
            message: format!("{label} is required"),
        });
    }

    if let Some(min) = config.min_length.filter(|&n| n > 0) {
        rules.push(Rule::MinLength {
            value: min,
            message: format!("{label} must be at least {min} characters"),
        });
    }

    if let Some(max) = config.max_length.filter(|&n| n > 0) {
        rules.push(Rule::MaxLength {
            value: max,
            message: format!("{label} must not exceed {max} characters"),
        });
    }

    if let Some(pattern) = &config.pattern {
        rules.push(Rule::Pattern {
            regex: pattern.regex.clone(),
            message: pattern.message.clone(),
        });
    }

    if let Some(validate) = &config.validate {
        rules.push(Rule::Validate(validate.clone()));
    }

    rules
}
