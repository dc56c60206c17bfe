use super::*;

fn contact() -> ContactInfo {
    ContactInfo {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        mobile: "5551234567".to_owned(),
    }
}

// =============================================================
// Defaults & restore
// =============================================================

#[test]
fn default_session_starts_on_welcome() {
    let state = SessionState::default();
    assert_eq!(state.stage, Stage::Welcome);
    assert!(state.contact.is_none());
    assert!(state.session_id.is_none());
    assert!(state.topic.is_none());
}

#[test]
fn restore_without_stored_contact_starts_on_welcome() {
    let state = SessionState::restore(None);
    assert_eq!(state.stage, Stage::Welcome);
    assert!(state.session_id.is_none());
}

#[test]
fn restore_with_stored_contact_skips_to_chat() {
    let state = SessionState::restore(Some(contact()));
    assert_eq!(state.stage, Stage::Chat);
    assert_eq!(state.contact, Some(contact()));
    assert!(state.session_id.is_some_and(|id| !id.is_empty()));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn faq_click_moves_to_contact_collection() {
    let mut state = SessionState::default();
    state.start_contact_collection("How do I get started?".to_owned());
    assert_eq!(state.stage, Stage::ContactCollection);
    assert_eq!(state.topic.as_deref(), Some("How do I get started?"));
}

#[test]
fn repeated_start_keeps_first_topic() {
    let mut state = SessionState::default();
    state.start_contact_collection("first".to_owned());
    state.start_contact_collection("second".to_owned());
    assert_eq!(state.topic.as_deref(), Some("first"));
}

#[test]
fn start_contact_collection_is_noop_from_chat() {
    let mut state = SessionState::restore(Some(contact()));
    state.start_contact_collection("topic".to_owned());
    assert_eq!(state.stage, Stage::Chat);
    assert!(state.topic.is_none());
}

#[test]
fn begin_chat_records_contact_and_session() {
    let mut state = SessionState::default();
    state.start_contact_collection("topic".to_owned());
    state.begin_chat(contact(), "session-1".to_owned());
    assert_eq!(state.stage, Stage::Chat);
    assert_eq!(state.contact, Some(contact()));
    assert_eq!(state.session_id.as_deref(), Some("session-1"));
}

// =============================================================
// Session ids
// =============================================================

#[test]
fn session_ids_are_nonempty_and_unique() {
    let a = new_session_id();
    let b = new_session_id();
    assert!(!a.is_empty());
    assert_ne!(a, b);
}
