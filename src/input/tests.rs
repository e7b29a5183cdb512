//! Tests for the form-bound input.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::form::{Form, FormEvent, Mode, RuleKind, Submission, Validator};
    use crate::icon::Icon;
    use crate::textfield::{Adornment, AdornmentClickMsg, AdornmentPosition, InputType};
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use tokio::time::{sleep, Duration};

    fn strip(s: &str) -> String {
        lipgloss_extras::lipgloss::strip_ansi(s)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers,
        })
    }

    fn type_str(input: &mut Model, form: &mut Form, s: &str) {
        for c in s.chars() {
            let _ = input.update(&key(KeyCode::Char(c), KeyModifiers::NONE), form);
        }
    }

    fn message_for(config: &FieldConfig, kind: RuleKind) -> Option<String> {
        build_rules(config)
            .find(kind)
            .and_then(|r| r.message().map(str::to_string))
    }

    #[test]
    fn test_default_rules() {
        let config = FieldConfig::new("name", "Name");
        assert_eq!(build_rules(&config).kinds(), vec![RuleKind::MaxLength]);
        assert_eq!(
            message_for(&config, RuleKind::MaxLength).as_deref(),
            Some("Name must not exceed 150 characters")
        );
    }

    #[test]
    fn test_rule_messages_use_label() {
        let config = FieldConfig::new("email", "Email")
            .with_required(true)
            .with_min_length(Some(3))
            .with_max_length(Some(10));

        assert_eq!(
            build_rules(&config).kinds(),
            vec![RuleKind::Required, RuleKind::MinLength, RuleKind::MaxLength]
        );
        assert_eq!(
            message_for(&config, RuleKind::Required).as_deref(),
            Some("Email is required")
        );
        assert_eq!(
            message_for(&config, RuleKind::MinLength).as_deref(),
            Some("Email must be at least 3 characters")
        );
        assert_eq!(
            message_for(&config, RuleKind::MaxLength).as_deref(),
            Some("Email must not exceed 10 characters")
        );
    }

    #[test]
    fn test_absent_and_zero_lengths_add_no_rule() {
        let config = FieldConfig::new("name", "Name")
            .with_min_length(Some(0))
            .with_max_length(None);
        assert!(build_rules(&config).is_empty());
    }

    #[test]
    fn test_pattern_and_validate_rules() {
        let config = FieldConfig::new("zip", "ZIP")
            .with_pattern(Pattern::new(r"^[0-9]+$", "digits only").unwrap())
            .with_validate(Validator::sync(|v: &str| {
                if v.starts_with('0') {
                    Err("no leading zero".into())
                } else {
                    Ok(())
                }
            }));
        assert_eq!(
            build_rules(&config).kinds(),
            vec![RuleKind::MaxLength, RuleKind::Pattern, RuleKind::Validate]
        );
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = Pattern::new("[a-", "bad").unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { ref pattern, .. } if pattern == "[a-"));
    }

    #[test]
    fn test_resolve_input_type() {
        assert_eq!(resolve_input_type(InputType::Password, false), InputType::Password);
        assert_eq!(resolve_input_type(InputType::Password, true), InputType::Text);
        assert_eq!(resolve_input_type(InputType::Email, true), InputType::Email);
        assert_eq!(resolve_input_type(InputType::Text, false), InputType::Text);
    }

    #[test]
    fn test_new_registers_field() {
        let mut form = Form::new();
        let config = FieldConfig::new("name", "Name").with_default_value("Ada");
        let input = new(config, &mut form).unwrap();
        assert_eq!(input.name(), "name");
        assert_eq!(form.value("name"), Some("Ada"));
        assert_eq!(form.rules("name").unwrap().len(), 1);
        assert!(strip(&input.view(&form)).contains("Ada"));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let mut form = Form::new();
        assert!(matches!(
            new(FieldConfig::new("", "Nameless"), &mut form),
            Err(FormError::EmptyName)
        ));
    }

    #[test]
    fn test_typing_writes_to_form() {
        let mut form = Form::new();
        let mut input = new(FieldConfig::new("name", "Name"), &mut form).unwrap();
        let _ = input.focus();

        type_str(&mut input, &mut form, "Ada");
        assert_eq!(form.value("name"), Some("Ada"));
        assert!(form.is_dirty("name"));
        assert!(strip(&input.view(&form)).contains("Ada"));
    }

    #[test]
    fn test_external_value_is_displayed() {
        let mut form = Form::new();
        let input = new(FieldConfig::new("name", "Name"), &mut form).unwrap();
        let _ = form.set_value("name", "Grace");
        assert!(strip(&input.view(&form)).contains("Grace"));
    }

    #[test]
    fn test_required_error_shown_after_submit() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("email", "Email").with_required(true),
            &mut form,
        )
        .unwrap();

        assert!(matches!(form.submit(), Submission::Invalid(_)));
        let props = input.props(&form);
        assert!(props.error);
        assert_eq!(props.helper_text.as_deref(), Some("Email is required"));

        let _ = input.focus();
        type_str(&mut input, &mut form, "a");
        assert!(form.error("email").is_none());
        assert!(!input.props(&form).error);
    }

    #[test]
    fn test_min_length_on_blur() {
        let mut form = Form::with_mode(Mode::OnBlur);
        let mut input = new(
            FieldConfig::new("name", "Name").with_min_length(Some(3)),
            &mut form,
        )
        .unwrap();
        let _ = input.focus();
        type_str(&mut input, &mut form, "ab");
        assert!(form.error("name").is_none());

        let _ = input.blur(&mut form);
        assert!(!input.focused());
        assert!(form.is_touched("name"));
        assert_eq!(
            form.error("name").map(|e| e.message.as_str()),
            Some("Name must be at least 3 characters")
        );
    }

    #[test]
    fn test_max_length_counts_characters() {
        let mut form = Form::with_mode(Mode::OnChange);
        let mut input = new(
            FieldConfig::new("code", "Code").with_max_length(Some(3)),
            &mut form,
        )
        .unwrap();
        let _ = input.focus();
        type_str(&mut input, &mut form, "äöü");
        assert!(form.error("code").is_none());
        type_str(&mut input, &mut form, "x");
        assert_eq!(
            form.error("code").map(|e| e.message.as_str()),
            Some("Code must not exceed 3 characters")
        );
    }

    #[test]
    fn test_pattern_message() {
        let mut form = Form::new();
        let _input = new(
            FieldConfig::new("zip", "ZIP")
                .with_default_value("12a")
                .with_pattern(Pattern::new(r"^[0-9]+$", "digits only").unwrap()),
            &mut form,
        )
        .unwrap();
        let _ = form.submit();
        assert_eq!(
            form.error("zip").map(|e| e.message.as_str()),
            Some("digits only")
        );

        let _ = form.set_value("zip", "123");
        assert!(form.error("zip").is_none());
    }

    #[test]
    fn test_password_toggle_round_trip() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("pw", "Password")
                .with_input_type(InputType::Password)
                .with_default_value("hunter2"),
            &mut form,
        )
        .unwrap();

        assert_eq!(input.input_type(), InputType::Password);
        assert!(!strip(&input.view(&form)).contains("hunter2"));

        input.toggle_reveal();
        assert_eq!(input.input_type(), InputType::Text);
        assert!(strip(&input.view(&form)).contains("hunter2"));

        input.toggle_reveal();
        assert_eq!(input.input_type(), InputType::Password);
        assert_eq!(form.value("pw"), Some("hunter2"));
    }

    #[test]
    fn test_toggle_via_key_keeps_focus_and_value() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("pw", "Password").with_input_type(InputType::Password),
            &mut form,
        )
        .unwrap();
        let _ = input.focus();
        type_str(&mut input, &mut form, "abc");

        let _ = input.update(&key(KeyCode::Char('r'), KeyModifiers::CONTROL), &mut form);
        assert!(input.show_password());
        assert!(input.focused());
        assert_eq!(form.value("pw"), Some("abc"));
    }

    #[test]
    fn test_toggle_via_click() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("pw", "Password").with_input_type(InputType::Password),
            &mut form,
        )
        .unwrap();

        let click: Msg = AdornmentClickMsg {
            id: "pw".into(),
            position: AdornmentPosition::End,
        }
        .into();
        let _ = input.update(&click, &mut form);
        assert!(input.show_password());
        assert!(!input.focused());
    }

    #[test]
    fn test_end_adornment_precedence() {
        let mut form = Form::new();
        let password = new(
            FieldConfig::new("pw", "Password")
                .with_input_type(InputType::Password)
                .with_end_icon(Icon::named("lock")),
            &mut form,
        )
        .unwrap();
        assert_eq!(
            password.end_adornment(),
            Some(Adornment::RevealToggle { revealed: false })
        );

        let search = new(
            FieldConfig::new("q", "Search")
                .with_start_icon(Icon::named("search"))
                .with_end_icon(Icon::node("[x]")),
            &mut form,
        )
        .unwrap();
        assert_eq!(
            search.start_adornment(),
            Some(Adornment::Icon(Icon::named("search")))
        );
        assert_eq!(search.end_adornment(), Some(Adornment::Icon(Icon::node("[x]"))));
    }

    #[test]
    fn test_view_without_start_icon_has_no_leading_decoration() {
        let mut form = Form::new();
        let plain = new(
            FieldConfig::new("name", "Name").with_default_value("Ada"),
            &mut form,
        )
        .unwrap();
        assert_eq!(plain.start_adornment(), None);
        assert!(strip(&plain.view(&form)).contains("│ Ada"));

        let search = new(
            FieldConfig::new("q", "Search")
                .with_default_value("rust")
                .with_start_icon(Icon::named("search")),
            &mut form,
        )
        .unwrap();
        assert!(strip(&search.view(&form)).contains("│ ⌕ rust"));
    }

    #[test]
    fn test_password_view_shows_toggle_instead_of_end_icon() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("pw", "Password")
                .with_input_type(InputType::Password)
                .with_end_icon(Icon::node("[x]")),
            &mut form,
        )
        .unwrap();

        let view = strip(&input.view(&form));
        assert!(view.contains('◉'));
        assert!(!view.contains("[x]"));

        input.toggle_reveal();
        let view = strip(&input.view(&form));
        assert!(view.contains('◌'));
        assert!(!view.contains('◉'));
        assert!(!view.contains("[x]"));
    }

    #[test]
    fn test_click_on_plain_end_icon_does_nothing() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("q", "Search").with_end_icon(Icon::node("[x]")),
            &mut form,
        )
        .unwrap();
        let click: Msg = AdornmentClickMsg {
            id: "q".into(),
            position: AdornmentPosition::End,
        }
        .into();
        assert!(input.update(&click, &mut form).is_none());
        assert!(!input.show_password());
        assert_eq!(input.input_type(), InputType::Text);
    }

    #[test]
    fn test_disabled_input_cannot_focus() {
        let mut form = Form::new();
        let mut input = new(
            FieldConfig::new("name", "Name").with_disabled(true),
            &mut form,
        )
        .unwrap();
        assert!(input.focus().is_none());
        assert!(!input.focused());
    }

    #[test]
    fn test_multiline_props() {
        let mut form = Form::new();
        let input = new(
            FieldConfig::new("bio", "Bio").with_multiline(Multiline {
                static_rows: None,
                flexible: Some(4),
            }),
            &mut form,
        )
        .unwrap();
        let props = input.props(&form);
        assert!(props.multiline);
        assert_eq!(props.rows, None);
        assert_eq!(props.max_rows, Some(4));
    }

    #[test]
    fn test_schema_deserializes_with_defaults() {
        let schema: FieldSchema = serde_json::from_str(
            r#"{
                "name": "zip",
                "label": "ZIP",
                "required": true,
                "minLength": 5,
                "pattern": { "value": "^[0-9]+$", "message": "digits only" },
                "startIcon": { "named": "search" },
                "multiline": { "staticRow": 2 }
            }"#,
        )
        .unwrap();
        assert_eq!(schema.max_length, Some(DEFAULT_MAX_LENGTH));

        let config = FieldConfig::try_from(schema).unwrap();
        assert_eq!(config.input_type, InputType::Text);
        assert_eq!(config.min_length, Some(5));
        assert_eq!(config.start_icon, Some(Icon::named("search")));
        assert_eq!(config.multiline.and_then(|m| m.static_rows), Some(2));
        assert_eq!(
            build_rules(&config).kinds(),
            vec![
                RuleKind::Required,
                RuleKind::MinLength,
                RuleKind::MaxLength,
                RuleKind::Pattern
            ]
        );
    }

    #[test]
    fn test_schema_null_max_length_removes_rule() {
        let schema: FieldSchema =
            serde_json::from_str(r#"{ "name": "note", "label": "Note", "maxLength": null }"#)
                .unwrap();
        let config = FieldConfig::try_from(schema).unwrap();
        assert!(build_rules(&config).is_empty());
    }

    #[test]
    fn test_schema_errors() {
        let schema = FieldSchema {
            name: "code".into(),
            pattern: Some(PatternSchema {
                value: "(".into(),
                message: "bad".into(),
            }),
            ..FieldSchema::default()
        };
        assert!(matches!(
            FieldConfig::try_from(schema),
            Err(FormError::InvalidPattern { .. })
        ));

        assert!(matches!(
            FieldConfig::try_from(FieldSchema::default()),
            Err(FormError::EmptyName)
        ));
    }

    #[tokio::test]
    async fn test_async_validator_through_input() {
        let mut form = Form::with_mode(Mode::OnChange);
        let mut input = new(
            FieldConfig::new("user", "Username").with_validate(Validator::new_async(
                |value: String| async move {
                    sleep(Duration::from_millis(1)).await;
                    if value == "root" {
                        Err("Username is taken".to_string())
                    } else {
                        Ok(())
                    }
                },
            )),
            &mut form,
        )
        .unwrap();
        let _ = input.focus();

        let mut last = None;
        for c in "root".chars() {
            last = input.update(&key(KeyCode::Char(c), KeyModifiers::NONE), &mut form);
        }
        assert!(form.is_validating("user"));

        let msg = last.expect("async validation command").await.unwrap();
        match form.update(&msg) {
            Some(FormEvent::Validated { name, error }) => {
                assert_eq!(name, "user");
                assert_eq!(error.unwrap().message, "Username is taken");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(input.props(&form).error);
    }
}
