//! Chat window header with branding and window controls.

use leptos::prelude::*;

use crate::app::WindowOpen;
use crate::state::theme::Theme;

/// Header bar: company logo and name, presence line, minimize/close buttons.
/// A logo that fails to load is hidden rather than shown broken.
#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let open = expect_context::<WindowOpen>();

    let logo_failed = RwSignal::new(false);
    let close = move |_| open.0.set(false);

    view! {
        <div class="support-widget__header" style:background-color=move || theme.get().header_color>
            <div class="support-widget__identity">
                {move || {
                    let logo = theme.get().company_logo;
                    (!logo.is_empty() && !logo_failed.get())
                        .then(|| {
                            view! {
                                <img
                                    class="support-widget__logo"
                                    src=logo
                                    alt="Logo"
                                    on:error=move |_| logo_failed.set(true)
                                />
                            }
                        })
                }}
                <div>
                    <h3 class="support-widget__company">{move || theme.get().company_name}</h3>
                    <p class="support-widget__presence">"Online now"</p>
                </div>
            </div>
            <div class="support-widget__controls">
                <button class="support-widget__control" on:click=close>
                    <MinimizeIcon/>
                </button>
                <button class="support-widget__control" on:click=close>
                    <CloseIcon/>
                </button>
            </div>
        </div>
    }
}

#[component]
fn MinimizeIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M8 3v3a1 1 0 0 1-1 1H4"></path>
            <path d="M16 3v3a1 1 0 0 0 1 1h3"></path>
            <path d="M8 21v-3a1 1 0 0 0-1-1H4"></path>
            <path d="M16 21v-3a1 1 0 0 1 1-1h3"></path>
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </svg>
    }
}
