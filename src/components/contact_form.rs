//! Contact collection step: name, email, and mobile with inline validation.

use leptos::prelude::*;

use crate::app::{WidgetConfig, WindowOpen};
#[cfg(feature = "browser")]
use crate::net::types::CreateConversationRequest;
use crate::state::messages::MessageLog;
use crate::state::session::{ContactInfo, SessionState};
use crate::state::theme::Theme;
use crate::util::validate::{is_valid_email, is_valid_mobile};

/// Contact form. Successful validation persists the contact details, mints a
/// session id, registers the conversation (best effort), and enters the chat
/// step seeded with the welcome message.
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();
    let theme = expect_context::<RwSignal<Theme>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let open = expect_context::<WindowOpen>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let mobile_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let mobile_value = mobile.get().trim().to_owned();

        name_error.set(name_value.is_empty().then_some("Please enter your name"));
        email_error.set(
            (!is_valid_email(&email_value)).then_some("Please enter a valid email address"),
        );
        mobile_error.set(
            (!is_valid_mobile(&mobile_value)).then_some("Please enter a 10-digit mobile number"),
        );
        if name_error.get().is_some() || email_error.get().is_some() || mobile_error.get().is_some()
        {
            return;
        }

        let contact = ContactInfo {
            name: name_value,
            email: email_value,
            mobile: mobile_value,
        };

        #[cfg(feature = "browser")]
        {
            busy.set(true);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                crate::util::storage::store_contact(&contact);
                let session_id = crate::state::session::new_session_id();
                let topic = session
                    .get_untracked()
                    .topic
                    .unwrap_or_else(|| crate::components::welcome::FREE_FORM_TOPIC.to_owned());
                let welcome = theme.get_untracked().welcome_message;
                let req = CreateConversationRequest {
                    client_key: config.client_key.clone(),
                    user_name: contact.name.clone(),
                    user_email: contact.email.clone(),
                    user_mobile: contact.mobile.clone(),
                    session_id: session_id.clone(),
                    message: topic,
                    is_bot: false,
                };
                // Best effort: the chat opens even when registration fails.
                if !crate::net::api::create_conversation(config.api_base(), &req).await {
                    log::warn!("conversation registration failed; continuing");
                }
                // Destroyed while the call was in flight: the signals are
                // disposed and the result is ignored.
                if session
                    .try_update(|s| s.begin_chat(contact, session_id))
                    .is_none()
                {
                    return;
                }
                let window_open = open.0.try_get_untracked().unwrap_or(true);
                let _ = messages.try_update(|m| m.push_bot(&welcome, window_open));
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&config, &contact, &session, &messages, &theme, &open);
        }
    };

    view! {
        <form class="support-widget__contact" on:submit=on_submit>
            <p class="support-widget__contact-intro">
                "Please share your details so we can help you faster"
            </p>

            <label class="support-widget__field">
                "Name"
                <input
                    class="support-widget__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || name_error.get().is_some()>
                <p class="support-widget__field-error">{move || name_error.get().unwrap_or_default()}</p>
            </Show>

            <label class="support-widget__field">
                "Email"
                <input
                    class="support-widget__input"
                    type="email"
                    placeholder="your.email@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || email_error.get().is_some()>
                <p class="support-widget__field-error">{move || email_error.get().unwrap_or_default()}</p>
            </Show>

            <label class="support-widget__field">
                "Mobile"
                <input
                    class="support-widget__input"
                    type="tel"
                    maxlength="10"
                    placeholder="10-digit mobile number"
                    prop:value=move || mobile.get()
                    on:input=move |ev| mobile.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || mobile_error.get().is_some()>
                <p class="support-widget__field-error">{move || mobile_error.get().unwrap_or_default()}</p>
            </Show>

            <button
                class="support-widget__submit"
                type="submit"
                style:background-color=move || theme.get().primary_color
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Starting chat..." } else { "Continue" }}
            </button>
        </form>
    }
}
