use super::*;
use crate::net::types::{LoginResponse, User};
use crate::util::session_store;

fn user(admin: bool) -> User {
    User {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        is_admin: admin,
    }
}

fn login_response() -> LoginResponse {
    LoginResponse {
        token: "tok-1".to_owned(),
        user: user(false),
    }
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn default_state_is_initializing_and_unauthenticated() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}

#[test]
fn initialize_with_empty_store_settles_unauthenticated() {
    session_store::clear();
    let mut state = AuthState::default();
    state.initialize();
    assert_eq!(state.phase, AuthPhase::Settled);
    assert!(!state.is_authenticated());
}

#[test]
fn initialize_with_stored_session_settles_authenticated() {
    session_store::clear();
    session_store::save("tok-1", &user(false));
    let mut state = AuthState::default();
    state.initialize();
    assert_eq!(state.phase, AuthPhase::Settled);
    assert_eq!(
        state.session,
        Some(Session {
            token: "tok-1".to_owned(),
            user: user(false),
        })
    );
}

#[test]
fn initialize_treats_token_without_user_as_unauthenticated() {
    session_store::set_raw(Some("tok-1"), None);
    let mut state = AuthState::default();
    state.initialize();
    assert_eq!(state.phase, AuthPhase::Settled);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout lifecycle
// =============================================================

#[test]
fn apply_login_persists_and_holds_session() {
    session_store::clear();
    let mut state = AuthState::default();
    state.initialize();
    state.apply_login(login_response());
    assert!(state.is_authenticated());
    let (token, stored) = session_store::read();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(stored, Some(user(false)));
}

#[test]
fn apply_login_defaults_to_dashboard() {
    session_store::clear();
    let mut state = AuthState::default();
    let destination = state.apply_login(login_response());
    assert_eq!(destination, NavigateTo("/dashboard".to_owned()));
}

#[test]
fn apply_login_consumes_pending_redirect_once() {
    session_store::clear();
    let mut state = AuthState::default();
    state.pending_redirect = Some("/repairs/42".to_owned());

    let first = state.apply_login(login_response());
    assert_eq!(first, NavigateTo("/repairs/42".to_owned()));
    assert!(state.pending_redirect.is_none());

    let second = state.apply_login(login_response());
    assert_eq!(second, NavigateTo("/dashboard".to_owned()));
}

#[test]
fn login_then_logout_leaves_store_empty() {
    session_store::clear();
    let mut state = AuthState::default();
    state.apply_login(login_response());

    let destination = state.logout();
    assert_eq!(destination, NavigateTo("/".to_owned()));
    assert!(!state.is_authenticated());
    assert_eq!(session_store::read(), (None, None));
    assert!(!state.check_auth_status());
}

#[test]
fn logout_succeeds_without_a_session() {
    session_store::clear();
    let mut state = AuthState::default();
    let destination = state.logout();
    assert_eq!(destination, NavigateTo("/".to_owned()));
    assert!(!state.is_authenticated());
}

// =============================================================
// Store re-derivation
// =============================================================

#[test]
fn check_auth_status_reflects_external_store_clear() {
    session_store::clear();
    let mut state = AuthState::default();
    state.apply_login(login_response());
    assert!(state.is_authenticated());

    // The 401 reaction clears the store behind the controller's back; the
    // next check re-derives and drops the in-memory session.
    session_store::clear();
    assert!(!state.check_auth_status());
    assert!(!state.is_authenticated());
    assert_eq!(state.phase, AuthPhase::Settled);
}

#[test]
fn check_auth_status_is_idempotent() {
    session_store::clear();
    session_store::save("tok-1", &user(true));
    let mut state = AuthState::default();
    assert!(state.check_auth_status());
    assert!(state.check_auth_status());
    assert!(state.is_admin());
}
