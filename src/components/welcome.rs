//! Welcome step: FAQ shortcuts and the free-form message action.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::theme::Theme;

/// FAQ shortcuts offered before any contact details are collected.
pub const FAQ_SHORTCUTS: [&str; 4] = [
    "How do I get started?",
    "What are your support hours?",
    "Where can I find pricing?",
    "I need help with my account",
];

/// Opener recorded when the visitor skips the FAQs.
pub const FREE_FORM_TOPIC: &str = "Send us a message";

/// Welcome panel. Any FAQ click or the "send us a message" action moves the
/// wizard to contact collection, remembering the chosen topic.
#[component]
pub fn WelcomePanel() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let choose = move |topic: &str| {
        session.update(|s| s.start_contact_collection(topic.to_owned()));
    };

    view! {
        <div class="support-widget__welcome">
            <p class="support-widget__welcome-text">{move || theme.get().welcome_message}</p>
            <ul class="support-widget__faqs">
                {FAQ_SHORTCUTS
                    .iter()
                    .map(|topic| {
                        let topic = *topic;
                        view! {
                            <li>
                                <button
                                    class="support-widget__faq"
                                    on:click=move |_| choose(topic)
                                >
                                    {topic}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                class="support-widget__cta"
                style:background-color=move || theme.get().button_color
                on:click=move |_| choose(FREE_FORM_TOPIC)
            >
                {FREE_FORM_TOPIC}
            </button>
        </div>
    }
}
