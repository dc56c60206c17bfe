//! Root widget component with shared-state context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::chat_window::ChatWindow;
use crate::components::launcher::Launcher;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;
#[cfg(feature = "browser")]
use crate::state::session::Stage;
use crate::state::theme::Theme;

/// API base used when the host page does not configure one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Static per-instance configuration, provided through context.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub client_key: String,
    pub custom_user_id: Option<String>,
    pub api_url: Option<String>,
}

impl WidgetConfig {
    /// Base URL for all backend calls.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

/// Whether the chat window is expanded, wrapped so the context type is
/// unambiguous.
#[derive(Clone, Copy)]
pub struct WindowOpen(pub RwSignal<bool>);

/// Root widget component.
///
/// Provides all shared state contexts, fetches the theme once, restores any
/// stored contact details, and toggles between the launcher bubble and the
/// chat window.
#[component]
pub fn App(
    client_key: String,
    #[prop(optional)] custom_user_id: Option<String>,
    #[prop(optional)] api_url: Option<String>,
) -> impl IntoView {
    let config = WidgetConfig {
        client_key,
        custom_user_id,
        api_url,
    };
    log::info!(
        "support widget mounted (client key {}, user {:?})",
        config.client_key,
        config.custom_user_id
    );

    let theme = RwSignal::new(Theme::default());
    let session = RwSignal::new(SessionState::restore(crate::util::storage::load_contact()));
    let messages = RwSignal::new(MessageLog::default());
    let open = WindowOpen(RwSignal::new(true));

    provide_context(config.clone());
    provide_context(theme);
    provide_context(session);
    provide_context(messages);
    provide_context(open);

    // One theme fetch per mount; failures keep the default theme. Once the
    // fetch settles, seed the welcome message for sessions restored straight
    // into the chat step.
    #[cfg(feature = "browser")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let overrides =
                crate::net::api::fetch_theme(config.api_base(), &config.client_key).await;
            // Destroyed while the fetch was in flight: the signals are
            // disposed and the result is ignored.
            if let Some(overrides) = overrides {
                if theme.try_set(Theme::merged(overrides)).is_some() {
                    return;
                }
            }
            let restored_into_chat = session
                .try_get_untracked()
                .is_some_and(|s| s.stage == Stage::Chat);
            let log_is_empty = messages
                .try_get_untracked()
                .is_some_and(|m| m.messages.is_empty());
            if restored_into_chat && log_is_empty {
                let Some(text) = theme.try_get_untracked().map(|t| t.welcome_message) else {
                    return;
                };
                let window_open = open.0.try_get_untracked().unwrap_or(true);
                let _ = messages.try_update(|m| m.push_bot(&text, window_open));
            }
        });
    }

    view! {
        <div class="support-widget">
            <Show when=move || open.0.get() fallback=move || view! { <Launcher/> }>
                <ChatWindow/>
            </Show>
        </div>
    }
}
