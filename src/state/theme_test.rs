use super::*;

fn fields(theme: &Theme) -> Vec<&str> {
    vec![
        &theme.primary_color,
        &theme.secondary_color,
        &theme.background_color,
        &theme.text_color,
        &theme.bot_message_color,
        &theme.user_message_color,
        &theme.header_color,
        &theme.button_color,
        &theme.company_name,
        &theme.welcome_message,
    ]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_theme_is_fully_populated() {
    let theme = Theme::default();
    for value in fields(&theme) {
        assert!(!value.is_empty());
    }
    // The logo is the one legitimately-empty default.
    assert!(theme.company_logo.is_empty());
}

#[test]
fn default_welcome_message_matches_copy() {
    assert_eq!(Theme::default().welcome_message, "Hello! How can I help you today?");
}

// =============================================================
// Merge
// =============================================================

#[test]
fn merging_empty_overrides_yields_default() {
    assert_eq!(Theme::merged(ThemeOverrides::default()), Theme::default());
}

#[test]
fn overrides_take_precedence_over_defaults() {
    let overrides = ThemeOverrides {
        primary_color: Some("#000000".to_owned()),
        company_name: Some("Acme".to_owned()),
        ..ThemeOverrides::default()
    };
    let theme = Theme::merged(overrides);
    assert_eq!(theme.primary_color, "#000000");
    assert_eq!(theme.company_name, "Acme");
    // Untouched fields keep their defaults.
    assert_eq!(theme.background_color, Theme::default().background_color);
}

#[test]
fn merge_is_total_for_partial_json_payloads() {
    let overrides: ThemeOverrides = serde_json::from_str(
        r##"{"headerColor": "#123456", "welcomeMessage": "Hi there", "borderRadius": "1rem"}"##,
    )
    .expect("partial payload with unknown fields");
    let theme = Theme::merged(overrides);
    assert_eq!(theme.header_color, "#123456");
    assert_eq!(theme.welcome_message, "Hi there");
    for value in fields(&theme) {
        assert!(!value.is_empty());
    }
}

#[test]
fn payload_field_names_are_camel_case() {
    let overrides: ThemeOverrides =
        serde_json::from_str(r##"{"botMessageColor": "#aaaaaa", "userMessageColor": "#bbbbbb"}"##)
            .expect("camelCase payload");
    assert_eq!(overrides.bot_message_color.as_deref(), Some("#aaaaaa"));
    assert_eq!(overrides.user_message_color.as_deref(), Some("#bbbbbb"));
}
