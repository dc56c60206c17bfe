//! Chat session wizard state: welcome, contact collection, chat.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Wizard step currently shown inside the chat window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Welcome,
    ContactCollection,
    Chat,
}

/// Visitor contact details collected before the chat begins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Per-instance session state driving the wizard.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub stage: Stage,
    pub contact: Option<ContactInfo>,
    /// Client-minted identifier correlating messages within one conversation.
    pub session_id: Option<String>,
    /// FAQ topic (or fixed opener) chosen on the welcome step; sent as the
    /// first message of the created conversation.
    pub topic: Option<String>,
}

impl SessionState {
    /// Restore state from previously stored contact info, skipping the
    /// contact-collection step when the visitor is already known.
    #[must_use]
    pub fn restore(stored: Option<ContactInfo>) -> Self {
        match stored {
            Some(contact) => Self {
                stage: Stage::Chat,
                contact: Some(contact),
                session_id: Some(new_session_id()),
                topic: None,
            },
            None => Self::default(),
        }
    }

    /// Move from the welcome step to contact collection, remembering the
    /// chosen topic. A no-op from any other step.
    pub fn start_contact_collection(&mut self, topic: String) {
        if self.stage == Stage::Welcome {
            self.stage = Stage::ContactCollection;
            self.topic = Some(topic);
        }
    }

    /// Enter the chat step with validated contact details and a freshly
    /// minted session id.
    pub fn begin_chat(&mut self, contact: ContactInfo, session_id: String) {
        self.contact = Some(contact);
        self.session_id = Some(session_id);
        self.stage = Stage::Chat;
    }
}

/// Mint a client-side session identifier.
#[must_use]
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
