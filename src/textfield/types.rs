//! Vocabulary types for the text field.

use crate::icon::Icon;
use bubbletea_rs::{Cmd, Msg};
use serde::{Deserialize, Serialize};

/// Input subtype. Mirrors the HTML input types a form field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// Free text.
    #[default]
    Text,
    /// Secret text, masked on screen.
    Password,
    /// Email address.
    Email,
    /// Numeric value.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search query.
    Search,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Local date and time.
    DatetimeLocal,
    /// Year and month.
    Month,
    /// Year and week.
    Week,
    /// Color value.
    Color,
}

impl InputType {
    /// The HTML name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Search => "search",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Month => "month",
            InputType::Week => "week",
            InputType::Color => "color",
        }
    }

    /// Whether the displayed characters are masked.
    pub fn is_masked(&self) -> bool {
        *self == InputType::Password
    }

    /// Whether a typed character is accepted. Only numeric and telephone
    /// fields filter their input.
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            InputType::Number => ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'),
            InputType::Tel => ch.is_ascii_digit() || matches!(ch, '+' | '-' | ' ' | '(' | ')'),
            _ => !ch.is_control(),
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual treatment of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Rounded border on every side.
    #[default]
    Outlined,
    /// Shaded background, no border.
    Filled,
    /// Single rule under the text.
    Standard,
}

/// Field density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// No vertical padding.
    #[default]
    Small,
    /// One line of vertical padding.
    Medium,
}

/// Autocomplete hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoComplete {
    /// Offer suggestions while typing.
    On,
    /// Never offer suggestions.
    Off,
}

/// Which decoration slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdornmentPosition {
    /// Before the text.
    Start,
    /// After the text.
    End,
}

/// Content of a decoration slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adornment {
    /// A caller-supplied icon.
    Icon(Icon),
    /// The show/hide control of a password field.
    RevealToggle {
        /// Whether the secret is currently shown.
        revealed: bool,
    },
}

impl Adornment {
    /// Accessible description of the reveal toggle.
    pub const TOGGLE_LABEL: &'static str = "toggle password visibility";

    /// Renders the decoration.
    ///
    /// The toggle shows the action it performs: an open eye while the secret
    /// is hidden, a closed one while it is shown.
    pub fn render(&self) -> String {
        match self {
            Adornment::Icon(icon) => icon.render(),
            Adornment::RevealToggle { revealed } => {
                let name = if *revealed { "visibility_off" } else { "visibility" };
                Icon::named(name).render()
            }
        }
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        match self {
            Adornment::Icon(icon) => icon.width(),
            Adornment::RevealToggle { .. } => {
                unicode_width::UnicodeWidthStr::width(self.render().as_str())
            }
        }
    }
}

/// Sent by the host when the pointer activates a decoration of the field
/// with this id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdornmentClickMsg {
    /// Id of the field.
    pub id: String,
    /// Slot that was clicked.
    pub position: AdornmentPosition,
}

/// Clipboard paste carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<AdornmentClickMsg> for Msg {
    fn from(msg: AdornmentClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// What the field did with a message.
///
/// The field never stores its value; an edit is reported here and the
/// owner decides whether to apply it.
#[derive(Default)]
pub struct Response {
    /// New value after an edit.
    pub value: Option<String>,
    /// The end decoration was activated by key or pointer.
    pub end_adornment_activated: bool,
    /// Command to run, e.g. a caret blink or a clipboard read.
    pub cmd: Option<Cmd>,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("value", &self.value)
            .field("end_adornment_activated", &self.end_adornment_activated)
            .field("cmd", &self.cmd.as_ref().map(|_| ".."))
            .finish()
    }
}
