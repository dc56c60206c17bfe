use super::*;

// =============================================================
// WidgetConfig
// =============================================================

#[test]
fn api_base_defaults_when_unset() {
    let config = WidgetConfig {
        client_key: "ck-1".to_owned(),
        custom_user_id: None,
        api_url: None,
    };
    assert_eq!(config.api_base(), DEFAULT_API_URL);
}

#[test]
fn api_base_prefers_configured_url() {
    let config = WidgetConfig {
        client_key: "ck-1".to_owned(),
        custom_user_id: None,
        api_url: Some("https://api.acme.dev/api".to_owned()),
    };
    assert_eq!(config.api_base(), "https://api.acme.dev/api");
}
