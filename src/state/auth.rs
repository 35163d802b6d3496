//! Session/auth controller: the application-wide authentication state
//! machine.
//!
//! `AuthState` is provided as an `RwSignal` context from the app root and
//! funnels every session mutation; apart from the HTTP layer's 401
//! reaction, nothing else writes the persistent store. Operations that end
//! in navigation return an explicit [`NavigateTo`] intent for the calling
//! component to execute, which keeps the controller free of router
//! dependencies.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, User};
use crate::util::session_store;

/// Default landing page after a successful login.
const POST_LOGIN_PATH: &str = "/dashboard";
/// Registration requires a subsequent explicit login.
const POST_REGISTER_PATH: &str = "/login";
const POST_LOGOUT_PATH: &str = "/";

/// Lifecycle of the initial session verification. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// The store has not been consulted yet.
    #[default]
    Initializing,
    /// A verification pass is in flight.
    Verifying,
    /// Verification finished; the session may be present or absent.
    Settled,
}

/// The authenticated identity for this browser context.
///
/// A session only exists when both the token and the user record resolved;
/// a stored token without a user record reads as unauthenticated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Navigation intent produced by a controller operation and executed by
/// the caller's navigation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigateTo(pub String);

/// Application-wide authentication state, provided via context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub session: Option<Session>,
    /// Displayable reason the last login/register attempt failed.
    pub error: Option<String>,
    /// Originally requested path a guard bounced to the login page,
    /// consumed once by the next successful login. Never persisted.
    pub pending_redirect: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin)
    }

    /// One-time verification pass on process start: consult the store and
    /// settle. No network call is made; token validity is discovered
    /// lazily on the first failing API call, not eagerly.
    pub fn initialize(&mut self) {
        self.phase = AuthPhase::Verifying;
        self.session = stored_session();
        self.phase = AuthPhase::Settled;
    }

    /// Idempotent re-derivation from the store, used by guards on every
    /// navigation. Last write wins; the store is the source of truth.
    pub fn check_auth_status(&mut self) -> bool {
        self.session = stored_session();
        self.phase = AuthPhase::Settled;
        self.is_authenticated()
    }

    /// Adopt a fresh login: persist it, hold it, and produce the
    /// post-login destination: the consumed pending redirect when a guard
    /// recorded one, the dashboard otherwise.
    pub fn apply_login(&mut self, response: LoginResponse) -> NavigateTo {
        session_store::save(&response.token, &response.user);
        self.session = Some(Session {
            token: response.token,
            user: response.user,
        });
        self.error = None;
        let destination = self
            .pending_redirect
            .take()
            .unwrap_or_else(|| POST_LOGIN_PATH.to_owned());
        NavigateTo(destination)
    }

    /// Drop the session locally and unconditionally; no network call is
    /// needed for logout to succeed.
    pub fn logout(&mut self) -> NavigateTo {
        session_store::clear();
        self.session = None;
        self.error = None;
        NavigateTo(POST_LOGOUT_PATH.to_owned())
    }
}

/// Both-or-nothing view of the store.
fn stored_session() -> Option<Session> {
    match session_store::read() {
        (Some(token), Some(user)) => Some(Session { token, user }),
        _ => None,
    }
}

/// Log in against the backend.
///
/// On success the session is persisted and the navigation intent returned;
/// on failure the session is untouched and the displayable reason lands in
/// [`AuthState::error`] as well as the returned error. Callers provide
/// mutual exclusion by disabling their submit control while in flight.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<NavigateTo, ApiError> {
    match api::login(email, password).await {
        Ok(response) => Ok(auth
            .try_update(|state| state.apply_login(response))
            .unwrap_or_else(|| NavigateTo(POST_LOGIN_PATH.to_owned()))),
        Err(err) => {
            let message = err.to_string();
            auth.update(|state| state.error = Some(message));
            Err(err)
        }
    }
}

/// Create an account. Registration does not establish a session; the
/// success intent navigates to the login page.
pub async fn register(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<NavigateTo, ApiError> {
    match api::register(email, password).await {
        Ok(()) => {
            auth.update(|state| state.error = None);
            Ok(NavigateTo(POST_REGISTER_PATH.to_owned()))
        }
        Err(err) => {
            let message = err.to_string();
            auth.update(|state| state.error = Some(message));
            Err(err)
        }
    }
}
