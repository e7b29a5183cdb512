//! Field configuration loaded from data.
//!
//! [`FieldSchema`] is the declarative part of a [`FieldConfig`]: everything
//! except the custom validator and the outer style. Keys use the same
//! camelCase names as the component's props.
//!
//! ```rust
//! use bubbletea_form_input::input::{FieldConfig, FieldSchema};
//! use bubbletea_form_input::textfield::InputType;
//!
//! let schema: FieldSchema = serde_json::from_str(
//!     r#"{ "name": "pw", "label": "Password", "type": "password", "required": true }"#,
//! )
//! .unwrap();
//! let config = FieldConfig::try_from(schema).unwrap();
//! assert_eq!(config.input_type, InputType::Password);
//! assert_eq!(config.max_length, Some(150));
//! ```

use super::config::{FieldConfig, Multiline, Pattern, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::error::{FormError, Result};
use crate::icon::Icon;
use crate::textfield::{AutoComplete, InputType, Size, Variant, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};

/// Pattern source and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSchema {
    /// Regular expression source.
    pub value: String,
    /// Message shown on mismatch.
    pub message: String,
}

/// Serialisable field configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSchema {
    /// Label.
    pub label: String,
    /// Field key.
    pub name: String,
    /// Input subtype.
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Visual variant.
    pub variant: Variant,
    /// Density.
    pub size: Size,
    /// Disabled flag.
    pub disabled: bool,
    /// Read-only flag.
    pub read_only: bool,
    /// Full-width flag.
    pub full_width: bool,
    /// Minimum length.
    pub min_length: Option<usize>,
    /// Maximum length; `null` removes the default.
    pub max_length: Option<usize>,
    /// Pattern constraint.
    pub pattern: Option<PatternSchema>,
    /// Required flag.
    pub required: bool,
    /// Default value.
    pub default_value: String,
    /// Multiline sizing.
    pub multiline: Option<Multiline>,
    /// Leading decoration.
    pub start_icon: Option<Icon>,
    /// Trailing decoration.
    pub end_icon: Option<Icon>,
    /// Autocomplete hint.
    pub auto_complete: Option<AutoComplete>,
    /// Completion candidates.
    pub suggestions: Vec<String>,
    /// Content width.
    pub width: usize,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            label: String::new(),
            name: String::new(),
            input_type: InputType::Text,
            variant: Variant::Outlined,
            size: Size::Small,
            disabled: false,
            read_only: false,
            full_width: false,
            min_length: Some(DEFAULT_MIN_LENGTH),
            max_length: Some(DEFAULT_MAX_LENGTH),
            pattern: None,
            required: false,
            default_value: String::new(),
            multiline: None,
            start_icon: None,
            end_icon: None,
            auto_complete: None,
            suggestions: Vec::new(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl TryFrom<FieldSchema> for FieldConfig {
    type Error = FormError;

    fn try_from(schema: FieldSchema) -> Result<Self> {
        if schema.name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let pattern = schema
            .pattern
            .map(|p| Pattern::new(&p.value, p.message))
            .transpose()?;

        let mut config = FieldConfig::new(schema.name, schema.label)
            .with_input_type(schema.input_type)
            .with_variant(schema.variant)
            .with_size(schema.size)
            .with_disabled(schema.disabled)
            .with_read_only(schema.read_only)
            .with_full_width(schema.full_width)
            .with_min_length(schema.min_length)
            .with_max_length(schema.max_length)
            .with_required(schema.required)
            .with_default_value(schema.default_value)
            .with_suggestions(schema.suggestions)
            .with_width(schema.width);
        config.pattern = pattern;
        config.multiline = schema.multiline;
        config.start_icon = schema.start_icon;
        config.end_icon = schema.end_icon;
        config.auto_complete = schema.auto_complete;
        Ok(config)
    }
}
