//! Widget theme configuration and default branding values.
//!
//! DESIGN
//! ======
//! A theme is resolved once at mount time: a partial payload fetched from the
//! backend is merged over the hardcoded defaults so every field is always a
//! usable string, then left unchanged for the widget's lifetime.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

/// Fully-resolved style and branding values for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub bot_message_color: String,
    pub user_message_color: String,
    pub header_color: String,
    pub button_color: String,
    pub company_name: String,
    pub company_logo: String,
    pub welcome_message: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#1d4ed8".to_owned(),
            secondary_color: "#589ee4".to_owned(),
            background_color: "#ffffff".to_owned(),
            text_color: "#1f2937".to_owned(),
            bot_message_color: "#f8fafc".to_owned(),
            user_message_color: "#1d4ed8".to_owned(),
            header_color: "#589ee4".to_owned(),
            button_color: "#1d4ed8".to_owned(),
            company_name: "Your Company".to_owned(),
            company_logo: String::new(),
            welcome_message: "Hello! How can I help you today?".to_owned(),
        }
    }
}

/// Partial theme payload as returned by the public theme endpoint.
///
/// Every field is optional; unknown fields are ignored so backend additions
/// do not break older widgets.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub bot_message_color: Option<String>,
    pub user_message_color: Option<String>,
    pub header_color: Option<String>,
    pub button_color: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub welcome_message: Option<String>,
}

impl Theme {
    /// Overlay `overrides` on the default theme. Fields absent from the
    /// payload keep their default value, so the result is always fully
    /// populated.
    #[must_use]
    pub fn merged(overrides: ThemeOverrides) -> Self {
        let mut theme = Self::default();
        if let Some(v) = overrides.primary_color {
            theme.primary_color = v;
        }
        if let Some(v) = overrides.secondary_color {
            theme.secondary_color = v;
        }
        if let Some(v) = overrides.background_color {
            theme.background_color = v;
        }
        if let Some(v) = overrides.text_color {
            theme.text_color = v;
        }
        if let Some(v) = overrides.bot_message_color {
            theme.bot_message_color = v;
        }
        if let Some(v) = overrides.user_message_color {
            theme.user_message_color = v;
        }
        if let Some(v) = overrides.header_color {
            theme.header_color = v;
        }
        if let Some(v) = overrides.button_color {
            theme.button_color = v;
        }
        if let Some(v) = overrides.company_name {
            theme.company_name = v;
        }
        if let Some(v) = overrides.company_logo {
            theme.company_logo = v;
        }
        if let Some(v) = overrides.welcome_message {
            theme.welcome_message = v;
        }
        theme
    }
}
