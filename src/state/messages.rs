//! In-memory message log with unread and in-flight bookkeeping.
//!
//! DESIGN
//! ======
//! The log is append-only and owned by a single widget instance; nothing is
//! persisted, so a page reload starts a fresh conversation. Ids come from a
//! monotonic counter and are only used for render keying.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Fixed reply appended when the chat backend cannot be reached.
pub const ERROR_REPLY: &str = "There was an error contacting the chatbot. Please try again.";

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub is_bot: bool,
    /// Milliseconds since the Unix epoch; 0 outside a browser.
    pub timestamp: f64,
}

/// Append-only message log for one widget instance.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<Message>,
    next_id: u64,
    /// Bot messages that arrived while the window was closed.
    pub unread: u32,
    /// True while a bot reply is in flight; sending is disabled.
    pub pending: bool,
}

impl MessageLog {
    /// Append a visitor message. Whitespace-only input is rejected and the
    /// log is left untouched.
    pub fn push_user(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(text, false);
        true
    }

    /// Append a bot message, counting it as unread when the window is closed.
    pub fn push_bot(&mut self, text: &str, window_open: bool) {
        self.push(text, true);
        if !window_open {
            self.unread += 1;
        }
    }

    /// Clear the unread counter; called when the window is opened.
    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    fn push(&mut self, text: &str, is_bot: bool) {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id,
            text: text.to_owned(),
            is_bot,
            timestamp: now_ms(),
        });
    }
}

/// Current time in epoch milliseconds, or 0 outside a browser.
fn now_ms() -> f64 {
    #[cfg(feature = "browser")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "browser"))]
    {
        0.0
    }
}
