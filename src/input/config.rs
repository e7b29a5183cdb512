//! Field configuration.

use crate::error::{FormError, Result};
use crate::form::Validator;
use crate::icon::Icon;
use crate::textfield::{AutoComplete, InputType, Size, Variant, DEFAULT_WIDTH};
use lipgloss_extras::prelude::Style;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum length applied when none is configured. Zero adds no rule.
pub const DEFAULT_MIN_LENGTH: usize = 0;
/// Maximum length applied when none is configured.
pub const DEFAULT_MAX_LENGTH: usize = 150;

/// A regular expression the value must match, with the message shown when
/// it does not.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Compiled expression.
    pub regex: Regex,
    /// Message shown on mismatch.
    pub message: String,
}

impl Pattern {
    /// Compiles a pattern.
    pub fn new(source: &str, message: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| FormError::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self {
            regex,
            message: message.into(),
        })
    }
}

/// Row sizing of a multiline field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Multiline {
    /// Fixed number of rows.
    #[serde(rename = "staticRow")]
    pub static_rows: Option<usize>,
    /// Grow with the content up to this many rows.
    pub flexible: Option<usize>,
}

/// Everything a caller configures about one form input.
///
/// Build it with [`FieldConfig::new`] and the `with_*` methods:
///
/// ```rust
/// use bubbletea_form_input::input::{FieldConfig, Pattern};
/// use bubbletea_form_input::textfield::InputType;
///
/// let config = FieldConfig::new("zip", "ZIP code")
///     .with_required(true)
///     .with_max_length(Some(5))
///     .with_pattern(Pattern::new(r"^[0-9]+$", "digits only").unwrap());
/// assert_eq!(config.input_type, InputType::Text);
/// ```
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Label shown above the field and used in rule messages.
    pub label: String,
    /// Key of the field in the form.
    pub name: String,
    /// Input subtype.
    pub input_type: InputType,
    /// Visual treatment.
    pub variant: Variant,
    /// Density.
    pub size: Size,
    /// Ignore focus and input.
    pub disabled: bool,
    /// Allow caret movement but no edits.
    pub read_only: bool,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Minimum character count. `None` or zero adds no rule.
    pub min_length: Option<usize>,
    /// Maximum character count. `None` or zero adds no rule.
    pub max_length: Option<usize>,
    /// Expression the value must match.
    pub pattern: Option<Pattern>,
    /// Caller-supplied validator.
    pub validate: Option<Validator>,
    /// Value must be present.
    pub required: bool,
    /// Value registered with the form.
    pub default_value: String,
    /// Multiline sizing; `None` for a single-line field.
    pub multiline: Option<Multiline>,
    /// Decoration before the text.
    pub start_icon: Option<Icon>,
    /// Decoration after the text. Replaced by the reveal toggle on password
    /// fields.
    pub end_icon: Option<Icon>,
    /// Autocomplete hint.
    pub auto_complete: Option<AutoComplete>,
    /// Completion candidates.
    pub suggestions: Vec<String>,
    /// Content width in cells.
    pub width: usize,
    /// Extra style for the outer box.
    pub style: Option<Style>,
}

impl FieldConfig {
    /// Creates a text field configuration with default options.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            input_type: InputType::Text,
            variant: Variant::Outlined,
            size: Size::Small,
            disabled: false,
            read_only: false,
            full_width: false,
            min_length: Some(DEFAULT_MIN_LENGTH),
            max_length: Some(DEFAULT_MAX_LENGTH),
            pattern: None,
            validate: None,
            required: false,
            default_value: String::new(),
            multiline: None,
            start_icon: None,
            end_icon: None,
            auto_complete: None,
            suggestions: Vec::new(),
            width: DEFAULT_WIDTH,
            style: None,
        }
    }

    /// Sets the input subtype.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the visual variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the density.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Disables the field.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Makes the field read-only.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Stretches the field to the container width.
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Sets the minimum length.
    pub fn with_min_length(mut self, min: Option<usize>) -> Self {
        self.min_length = min;
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    /// Sets the pattern.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Sets the custom validator.
    pub fn with_validate(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Marks the field as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the default value.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Makes the field multiline.
    pub fn with_multiline(mut self, multiline: Multiline) -> Self {
        self.multiline = Some(multiline);
        self
    }

    /// Sets the leading decoration.
    pub fn with_start_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    /// Sets the trailing decoration.
    pub fn with_end_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    /// Sets the autocomplete hint.
    pub fn with_auto_complete(mut self, auto_complete: AutoComplete) -> Self {
        self.auto_complete = Some(auto_complete);
        self
    }

    /// Sets completion candidates.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Sets the content width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets an extra style for the outer box.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}
