//! Expanded chat window routing the wizard steps.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::conversation::Conversation;
use crate::components::header::Header;
use crate::components::welcome::WelcomePanel;
use crate::state::session::{SessionState, Stage};
use crate::state::theme::Theme;

/// Floating chat window: header plus the body for the current wizard step.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div
            class="support-widget__window"
            style:background-color=move || theme.get().background_color
            style:color=move || theme.get().text_color
        >
            <Header/>
            {move || match session.get().stage {
                Stage::Welcome => view! { <WelcomePanel/> }.into_any(),
                Stage::ContactCollection => view! { <ContactForm/> }.into_any(),
                Stage::Chat => view! { <Conversation/> }.into_any(),
            }}
        </div>
    }
}
