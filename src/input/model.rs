//! The bound form input.

use super::config::FieldConfig;
use super::rules::{build_rules, resolve_input_type};
use crate::error::Result;
use crate::form::{Form, RuleSet};
use crate::textfield::{self, Adornment, InputType, Props};
use crate::Component;
use bubbletea_rs::{Cmd, Msg};
use tracing::debug;

/// A text field whose value lives in a [`Form`].
///
/// The model keeps the configuration, the password reveal flag and the
/// widget's interaction state. Value and error are always read from the
/// form it was registered with, so edits made elsewhere show up on the next
/// frame.
#[derive(Debug, Clone)]
pub struct Model {
    config: FieldConfig,
    show_password: bool,
    /// Underlying text field.
    pub field: textfield::Model,
}

/// Registers the configured field with `form` and returns its input.
///
/// # Errors
///
/// Fails with [`crate::error::FormError::EmptyName`] when the name is empty.
///
/// ```rust
/// use bubbletea_form_input::form::Form;
/// use bubbletea_form_input::input::{self, FieldConfig};
///
/// let mut form = Form::new();
/// let email = input::new(FieldConfig::new("email", "Email").with_required(true), &mut form)
///     .unwrap();
/// assert!(form.contains("email"));
/// assert!(email.view(&form).contains("Email *"));
/// ```
pub fn new(config: FieldConfig, form: &mut Form) -> Result<Model> {
    form.register(&config.name, &config.default_value, build_rules(&config))?;
    Ok(Model {
        config,
        show_password: false,
        field: textfield::new(),
    })
}

impl Model {
    /// The configuration this input was built from.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Field key in the form.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Whether a password is currently shown in clear text.
    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Flips password visibility. Has no effect on the value.
    pub fn toggle_reveal(&mut self) {
        self.show_password = !self.show_password;
        debug!(
            field = %self.config.name,
            revealed = self.show_password,
            "toggled password visibility"
        );
    }

    /// The input type currently displayed.
    pub fn input_type(&self) -> InputType {
        resolve_input_type(self.config.input_type, self.show_password)
    }

    /// Rules derived from the configuration.
    pub fn rules(&self) -> RuleSet {
        build_rules(&self.config)
    }

    /// Leading decoration, the configured start icon.
    pub fn start_adornment(&self) -> Option<Adornment> {
        self.config.start_icon.clone().map(Adornment::Icon)
    }

    /// Trailing decoration.
    ///
    /// Password fields always get the reveal toggle, replacing any
    /// configured end icon.
    pub fn end_adornment(&self) -> Option<Adornment> {
        if self.config.input_type == InputType::Password {
            return Some(Adornment::RevealToggle {
                revealed: self.show_password,
            });
        }
        self.config.end_icon.clone().map(Adornment::Icon)
    }

    /// Builds the widget props for the current frame.
    pub fn props(&self, form: &Form) -> Props {
        let c = &self.config;
        let error = form.error(&c.name);
        let multiline = c.multiline.unwrap_or_default();

        Props {
            id: c.name.clone(),
            label: c.label.clone(),
            value: form.value(&c.name).unwrap_or_default().to_string(),
            input_type: self.input_type(),
            variant: c.variant,
            size: c.size,
            disabled: c.disabled,
            read_only: c.read_only,
            required: c.required,
            full_width: c.full_width,
            width: c.width,
            error: error.is_some(),
            helper_text: error.map(|e| e.message.clone()),
            multiline: c.multiline.is_some(),
            rows: multiline.static_rows,
            max_rows: multiline.flexible,
            start_adornment: self.start_adornment(),
            end_adornment: self.end_adornment(),
            auto_complete: c.auto_complete,
            suggestions: c.suggestions.clone(),
            style: c.style.clone(),
        }
    }

    /// Handles a message.
    ///
    /// Edits are written to the form, which may answer with a validation
    /// command. Activating the toggle on a password field flips visibility.
    pub fn update(&mut self, msg: &Msg, form: &mut Form) -> Option<Cmd> {
        let props = self.props(form);
        let response = self.field.update(msg, &props);

        if response.end_adornment_activated && self.config.input_type == InputType::Password {
            self.toggle_reveal();
        }

        let form_cmd = response
            .value
            .and_then(|value| form.set_value(&self.config.name, value));

        // Caret blinks and paste requests never carry an edit.
        form_cmd.or(response.cmd)
    }

    /// Renders the field.
    pub fn view(&self, form: &Form) -> String {
        self.field.view(&self.props(form))
    }

    /// Focuses the field. Disabled fields stay unfocused.
    pub fn focus(&mut self) -> Option<Cmd> {
        if self.config.disabled {
            return None;
        }
        self.field.focus()
    }

    /// Removes focus and reports the blur to the form.
    pub fn blur(&mut self, form: &mut Form) -> Option<Cmd> {
        self.field.blur();
        form.blur(&self.config.name)
    }

    /// Whether the field has focus.
    pub fn focused(&self) -> bool {
        self.field.focused()
    }

    /// Sets the width used by full-width fields.
    pub fn set_container_width(&mut self, width: usize) {
        self.field.set_container_width(width);
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    /// Drops focus without notifying a form. Use [`Model::blur`] when the
    /// form should see the blur.
    fn blur(&mut self) {
        self.field.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
