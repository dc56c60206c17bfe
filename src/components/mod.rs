//! Leptos components composing the chat window UI.

pub mod chat_window;
pub mod contact_form;
pub mod conversation;
pub mod header;
pub mod launcher;
pub mod welcome;
