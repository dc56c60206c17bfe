//! End-to-end wizard flow exercised at the state level: welcome, contact
//! collection, chat exchange, and the failure path.

use leptos::prelude::*;

use support_widget::state::messages::{ERROR_REPLY, MessageLog};
use support_widget::state::session::{ContactInfo, SessionState, Stage, new_session_id};
use support_widget::state::theme::Theme;
use support_widget::util::validate::{is_valid_email, is_valid_mobile};

fn valid_contact() -> ContactInfo {
    ContactInfo {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        mobile: "5551234567".to_owned(),
    }
}

#[test]
fn faq_to_chat_happy_path() {
    let mut session = SessionState::default();
    let mut log = MessageLog::default();
    assert_eq!(session.stage, Stage::Welcome);

    // FAQ click moves the wizard to contact collection.
    session.start_contact_collection("How do I get started?".to_owned());
    assert_eq!(session.stage, Stage::ContactCollection);

    // Valid contact details enter the chat with a fresh session id.
    let contact = valid_contact();
    assert!(is_valid_email(&contact.email));
    assert!(is_valid_mobile(&contact.mobile));
    session.begin_chat(contact, new_session_id());
    assert_eq!(session.stage, Stage::Chat);
    assert!(session.session_id.is_some());

    // The chat opens seeded with the welcome message.
    log.push_bot(&Theme::default().welcome_message, true);

    // A sent message is followed by the bot reply, in order.
    assert!(log.push_user("hello"));
    log.push_bot("Hi Alice, how can I help?", true);

    let texts: Vec<(&str, bool)> = log
        .messages
        .iter()
        .map(|m| (m.text.as_str(), m.is_bot))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("Hello! How can I help you today?", true),
            ("hello", false),
            ("Hi Alice, how can I help?", true),
        ]
    );
}

#[test]
fn invalid_contact_does_not_advance_the_wizard() {
    let mut session = SessionState::default();
    session.start_contact_collection("topic".to_owned());

    // The form only calls begin_chat after validation passes; a bad email or
    // mobile leaves the wizard where it is.
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_mobile("12345"));
    assert_eq!(session.stage, Stage::ContactCollection);
    assert!(session.session_id.is_none());
}

#[test]
fn failed_send_appends_one_error_reply_and_reenables_sending() {
    let mut log = MessageLog::default();
    assert!(log.push_user("hello"));
    log.pending = true;

    // Network failure: exactly one placeholder bot reply, pending cleared.
    log.push_bot(ERROR_REPLY, true);
    log.pending = false;

    assert_eq!(log.messages.len(), 2);
    assert_eq!(log.messages[1].text, ERROR_REPLY);
    assert!(log.messages[1].is_bot);
    assert!(!log.pending);
}

#[test]
fn empty_send_leaves_the_log_unchanged() {
    let mut log = MessageLog::default();
    log.push_bot(&Theme::default().welcome_message, true);
    let before = log.messages.len();

    assert!(!log.push_user("   "));
    assert_eq!(log.messages.len(), before);
}

#[test]
fn replies_settling_after_teardown_are_dropped() {
    let owner = Owner::new();
    let (messages, open) =
        owner.with(|| (RwSignal::new(MessageLog::default()), RwSignal::new(true)));
    messages.update(|m| {
        assert!(m.push_user("hello"));
        m.pending = true;
    });

    // The host page destroyed the widget while the request was in flight,
    // disposing the signals the continuation would write to.
    drop(owner);

    // The send continuation reads through the fallible accessors, so the
    // late reply is ignored instead of panicking.
    let window_open = open.try_get_untracked().unwrap_or(true);
    let appended = messages.try_update(|m| {
        m.push_bot("late reply", window_open);
        m.pending = false;
    });
    assert!(appended.is_none());
}

#[test]
fn replies_while_minimized_surface_as_unread() {
    let mut log = MessageLog::default();
    assert!(log.push_user("hello"));

    // The visitor minimized the window before the reply settled.
    log.push_bot("got it", false);
    assert_eq!(log.unread, 1);

    // Re-opening the window clears the badge.
    log.mark_read();
    assert_eq!(log.unread, 0);
}
