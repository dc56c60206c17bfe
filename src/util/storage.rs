//! Browser localStorage persistence for visitor contact details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contact info survives page reloads so returning visitors skip the
//! contact-collection step. Helpers are browser-gated with inert native
//! fallbacks so callers stay unit-testable.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::ContactInfo;

/// localStorage key holding the full contact record as JSON.
pub const CONTACT_KEY: &str = "support_widget_contact";
/// Legacy key holding just the raw email string.
pub const EMAIL_KEY: &str = "userEmail";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "browser")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "browser")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (key, value);
    }
}

/// Read stored contact details, falling back to the legacy email-only key.
#[must_use]
pub fn load_contact() -> Option<ContactInfo> {
    if let Some(contact) = load_json::<ContactInfo>(CONTACT_KEY) {
        return Some(contact);
    }
    load_plain(EMAIL_KEY).map(|email| ContactInfo {
        email,
        ..ContactInfo::default()
    })
}

/// Persist contact details under both the JSON and legacy email keys.
pub fn store_contact(contact: &ContactInfo) {
    save_json(CONTACT_KEY, contact);
    save_plain(EMAIL_KEY, &contact.email);
}

fn load_plain(key: &str) -> Option<String> {
    #[cfg(feature = "browser")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = key;
        None
    }
}

fn save_plain(key: &str, value: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (key, value);
    }
}
