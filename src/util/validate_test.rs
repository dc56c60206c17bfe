use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn accepts_plain_address() {
    assert!(is_valid_email("user@example.com"));
}

#[test]
fn accepts_subdomains_and_plus_tags() {
    assert!(is_valid_email("first.last+tag@mail.example.co"));
}

#[test]
fn rejects_missing_domain() {
    assert!(!is_valid_email("user@"));
}

#[test]
fn rejects_dotless_domain() {
    assert!(!is_valid_email("user@example"));
}

#[test]
fn rejects_empty_string() {
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("user.example.com"));
}

#[test]
fn rejects_double_at_sign() {
    assert!(!is_valid_email("user@foo@example.com"));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("user @example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

#[test]
fn rejects_empty_domain_halves() {
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
}

// =============================================================
// Mobile
// =============================================================

#[test]
fn accepts_ten_digits() {
    assert!(is_valid_mobile("5551234567"));
}

#[test]
fn rejects_nine_and_eleven_digits() {
    assert!(!is_valid_mobile("555123456"));
    assert!(!is_valid_mobile("55512345678"));
}

#[test]
fn rejects_non_digit_characters() {
    assert!(!is_valid_mobile("555-123-45"));
    assert!(!is_valid_mobile("555123456x"));
    assert!(!is_valid_mobile(""));
}
