//! Contact form validation helpers.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Check an email address against the widget's lenient shape: a nonempty
/// local part, a single `@`, a domain containing a dot with nonempty halves,
/// and no whitespace anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Check a mobile number: exactly 10 ASCII digits, no separators.
#[must_use]
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}
