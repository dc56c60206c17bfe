//! Chat step: message history and the send input row.

use leptos::prelude::*;

use crate::app::{WidgetConfig, WindowOpen};
#[cfg(feature = "browser")]
use crate::net::types::ChatRequest;
#[cfg(feature = "browser")]
use crate::state::messages::ERROR_REPLY;
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;
use crate::state::theme::Theme;

/// Free-form message exchange with the bot.
///
/// Sends are optimistic: the visitor's message is appended immediately and
/// further sends are disabled until the reply settles. Any network failure
/// appends the fixed placeholder reply and the conversation continues.
#[component]
pub fn Conversation() -> impl IntoView {
    // Stored so `do_send` stays `Copy` and can back both click and keydown.
    let config = StoredValue::new(expect_context::<WidgetConfig>());
    let theme = expect_context::<RwSignal<Theme>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let open = expect_context::<WindowOpen>();

    let input = RwSignal::new(String::new());
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = messages.get().messages.len();

        #[cfg(feature = "browser")]
        {
            if let Some(el) = list_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if messages.get_untracked().pending {
            return;
        }
        let text = input.get();
        let mut accepted = false;
        messages.update(|m| accepted = m.push_user(&text));
        if !accepted {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "browser")]
        {
            messages.update(|m| m.pending = true);
            let config = config.get_value();
            let state = session.get_untracked();
            let req = ChatRequest {
                client_key: config.client_key.clone(),
                message: text.trim().to_owned(),
                user_email: state.contact.map(|c| c.email).unwrap_or_default(),
                session_id: state.session_id.unwrap_or_default(),
            };
            leptos::task::spawn_local(async move {
                let reply = crate::net::api::request_bot_reply(config.api_base(), &req).await;
                if let Err(e) = &reply {
                    log::warn!("chat request failed: {e}");
                }
                // The widget may have been destroyed while the request was in
                // flight; a disposed signal drops the late reply.
                let window_open = open.0.try_get_untracked().unwrap_or(true);
                let _ = messages.try_update(|m| {
                    match reply {
                        Ok(text) => m.push_bot(&text, window_open),
                        Err(_) => m.push_bot(ERROR_REPLY, window_open),
                    }
                    m.pending = false;
                });
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (&config, &session, &open);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !messages.get().pending && !input.get().trim().is_empty();

    view! {
        <div class="support-widget__conversation">
            <div class="support-widget__messages" node_ref=list_ref>
                {move || {
                    let theme = theme.get();
                    messages
                        .get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let row = if msg.is_bot {
                                "support-widget__row support-widget__row--bot"
                            } else {
                                "support-widget__row support-widget__row--user"
                            };
                            let background = if msg.is_bot {
                                theme.bot_message_color.clone()
                            } else {
                                theme.user_message_color.clone()
                            };
                            let color = if msg.is_bot {
                                theme.text_color.clone()
                            } else {
                                "#ffffff".to_owned()
                            };
                            let text = msg.text.clone();
                            view! {
                                <div class=row>
                                    <div
                                        class="support-widget__bubble"
                                        style:background-color=background
                                        style:color=color
                                    >
                                        {text}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="support-widget__input-row">
                <input
                    class="support-widget__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="support-widget__send"
                    style:background-color=move || theme.get().button_color
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    <SendIcon/>
                </button>
            </div>
        </div>
    }
}

#[component]
fn SendIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <line x1="22" y1="2" x2="11" y2="13"></line>
            <polygon points="22,2 15,22 11,13 2,9"></polygon>
        </svg>
    }
}
