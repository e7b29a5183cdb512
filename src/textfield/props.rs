//! Per-frame configuration of the text field.

use super::types::{Adornment, AutoComplete, InputType, Size, Variant};
use lipgloss_extras::prelude::*;

/// Default content width in cells.
pub const DEFAULT_WIDTH: usize = 24;

/// Everything the field needs to draw and edit itself for one frame.
///
/// The value is read from here on every update and view, so the field
/// always shows whatever its owner holds.
#[derive(Debug, Clone)]
pub struct Props {
    /// Identifier, used to address pointer messages.
    pub id: String,
    /// Label shown above the text.
    pub label: String,
    /// Current text.
    pub value: String,
    /// Input subtype.
    pub input_type: InputType,
    /// Visual treatment.
    pub variant: Variant,
    /// Density.
    pub size: Size,
    /// Ignores focus and input, drawn faint.
    pub disabled: bool,
    /// Caret moves, text cannot change.
    pub read_only: bool,
    /// Label carries a required marker.
    pub required: bool,
    /// Use the container width instead of `width`.
    pub full_width: bool,
    /// Content width in cells.
    pub width: usize,
    /// Draw in the error color.
    pub error: bool,
    /// Text under the field, usually the error message.
    pub helper_text: Option<String>,
    /// Accept newlines and draw several lines.
    pub multiline: bool,
    /// Fixed number of lines when multiline.
    pub rows: Option<usize>,
    /// Upper bound on lines when multiline and `rows` is unset.
    pub max_rows: Option<usize>,
    /// Decoration before the text.
    pub start_adornment: Option<Adornment>,
    /// Decoration after the text.
    pub end_adornment: Option<Adornment>,
    /// Autocomplete hint; suggestions are offered unless this is `Off`.
    pub auto_complete: Option<AutoComplete>,
    /// Completion candidates.
    pub suggestions: Vec<String>,
    /// Extra style applied to the outer box.
    pub style: Option<Style>,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            value: String::new(),
            input_type: InputType::Text,
            variant: Variant::Outlined,
            size: Size::Small,
            disabled: false,
            read_only: false,
            required: false,
            full_width: false,
            width: DEFAULT_WIDTH,
            error: false,
            helper_text: None,
            multiline: false,
            rows: None,
            max_rows: None,
            start_adornment: None,
            end_adornment: None,
            auto_complete: None,
            suggestions: Vec::new(),
            style: None,
        }
    }
}

impl Props {
    /// Creates props for a field with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the current text.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the input subtype.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Makes the field multiline.
    pub fn with_rows(mut self, rows: Option<usize>, max_rows: Option<usize>) -> Self {
        self.multiline = true;
        self.rows = rows;
        self.max_rows = max_rows;
        self
    }

    /// Whether suggestions may be offered.
    pub fn suggestions_enabled(&self) -> bool {
        self.auto_complete != Some(AutoComplete::Off) && !self.suggestions.is_empty()
    }
}
