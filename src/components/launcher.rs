//! Floating launcher bubble shown while the chat window is collapsed.

use leptos::prelude::*;

use crate::app::WindowOpen;
use crate::state::messages::MessageLog;
use crate::state::theme::Theme;

/// Round launcher button with an unread-message badge. Opening the window
/// clears the unread counter.
#[component]
pub fn Launcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let messages = expect_context::<RwSignal<MessageLog>>();
    let open = expect_context::<WindowOpen>();

    let on_open = move |_| {
        open.0.set(true);
        messages.update(MessageLog::mark_read);
    };

    let has_unread = move || messages.get().unread > 0;

    view! {
        <button
            class="support-widget__launcher"
            style:background-color=move || theme.get().button_color
            on:click=on_open
        >
            "\u{1f4ac}"
            <Show when=has_unread>
                <span class="support-widget__badge">{move || messages.get().unread}</span>
            </Show>
        </button>
    }
}
