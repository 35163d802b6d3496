//! Persistent session store backed by `localStorage`.
//!
//! Holds exactly two entries: the opaque bearer token and the serialized
//! user record. The session/auth controller owns all writes; the HTTP
//! layer's 401 reaction is the only other caller of [`clear`]. Anything
//! unparsable reads back as absent, so a corrupted record degrades to
//! "logged out" rather than to a phantom session.
//!
//! Native (non-`hydrate`) builds keep the two entries in a thread-local so
//! unit tests and server rendering exercise the same code paths; SSR never
//! writes it, so nothing leaks between renders.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "repairbuddy_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "repairbuddy_user";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    // (token, user JSON) raw strings, mirroring what localStorage holds.
    static STORE: std::cell::RefCell<(Option<String>, Option<String>)> =
        const { std::cell::RefCell::new((None, None)) };
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist the token and user record, replacing any prior values.
///
/// Both writes are synchronous on the single UI event loop, so no reader
/// can observe the token without its user record.
pub fn save(token: &str, user: &User) {
    let user_json = match serde_json::to_string(user) {
        Ok(json) => json,
        Err(_) => return,
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, &user_json);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| *s.borrow_mut() = (Some(token.to_owned()), Some(user_json)));
    }
}

/// Read back whatever is currently stored.
///
/// A missing or malformed user record is returned as `None`.
pub fn read() -> (Option<String>, Option<User>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return (None, None);
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok());
        (token, user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| {
            let (token, user_json) = s.borrow().clone();
            let user = user_json.and_then(|json| serde_json::from_str(&json).ok());
            (token, user)
        })
    }
}

/// Remove both entries.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| *s.borrow_mut() = (None, None));
    }
}

/// Seed raw stored values, bypassing serialization.
#[cfg(all(test, not(feature = "hydrate")))]
pub(crate) fn set_raw(token: Option<&str>, user_json: Option<&str>) {
    STORE.with(|s| {
        *s.borrow_mut() = (token.map(str::to_owned), user_json.map(str::to_owned));
    });
}
