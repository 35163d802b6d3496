use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        is_admin: false,
    }
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn save_then_read_returns_exactly_what_was_saved() {
    clear();
    save("tok-1", &user());
    let (token, stored) = read();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(stored, Some(user()));
}

#[test]
fn save_replaces_prior_values() {
    clear();
    save("tok-1", &user());
    let other = User {
        id: "u-2".to_owned(),
        email: "c@d.com".to_owned(),
        is_admin: true,
    };
    save("tok-2", &other);
    let (token, stored) = read();
    assert_eq!(token.as_deref(), Some("tok-2"));
    assert_eq!(stored, Some(other));
}

#[test]
fn clear_removes_both_entries() {
    save("tok-1", &user());
    clear();
    assert_eq!(read(), (None, None));
}

// =============================================================
// Degraded reads fail toward "logged out"
// =============================================================

#[test]
fn empty_store_reads_absent() {
    clear();
    assert_eq!(read(), (None, None));
}

#[test]
fn malformed_user_record_reads_as_absent() {
    set_raw(Some("tok-1"), Some("{not json"));
    let (token, stored) = read();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert!(stored.is_none());
}

#[test]
fn token_without_user_reads_token_only() {
    set_raw(Some("tok-1"), None);
    let (token, stored) = read();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert!(stored.is_none());
}
