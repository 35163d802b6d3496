//! Shared HTTP pipeline for every backend call.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR) and
//! native builds: stubs returning [`ApiError::Network`], since the backend
//! is only reachable from the browser.
//!
//! The pipeline reads the bearer token from the session store immediately
//! before dispatch (a token written mid-session is picked up on the next
//! call) and applies one uniform reaction to failures. A 401 on a
//! token-carrying request means the session is dead: the store is cleared
//! and a redirect to the login page is scheduled, no matter which page
//! issued the call. Domain wrappers must never bypass this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::session_store;

/// Base path of the backend API, served (or proxied) same-origin.
pub const API_BASE: &str = "/api";

/// Where the forced navigation lands after session expiry.
pub const LOGIN_PATH: &str = "/login";

/// Delay before the session-expiry redirect, so in-flight UI updates can
/// settle before the location changes.
#[cfg(feature = "hydrate")]
const EXPIRY_REDIRECT_DELAY_MS: u64 = 400;

/// Uniform reaction to a response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) enum StatusAction {
    /// Success, or a client error left for the caller to interpret.
    Pass,
    /// The presented token is no longer valid.
    Expire,
    Forbid,
    ServerFail,
}

/// Classify a response status.
///
/// A 401 only means "session expired" when the request actually presented
/// a token; an anonymous 401 (a failed login attempt) is the caller's to
/// interpret and must not touch the store.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn classify(status: u16, sent_token: bool) -> StatusAction {
    match status {
        401 if sent_token => StatusAction::Expire,
        403 => StatusAction::Forbid,
        s if s >= 500 => StatusAction::ServerFail,
        _ => StatusAction::Pass,
    }
}

/// `Authorization` header value carrying a stored token.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Drop the stored session and schedule the forced navigation to the login
/// page. The store clear happens before the redirect is scheduled; other
/// in-flight requests may still complete in the window between the two.
#[cfg(feature = "hydrate")]
fn expire_session() {
    leptos::logging::warn!("session expired, clearing stored credentials");
    session_store::clear();
    leptos::task::spawn_local(async {
        gloo_timers::future::sleep(std::time::Duration::from_millis(EXPIRY_REDIRECT_DELAY_MS)).await;
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    });
}

/// Pull the backend's `{message}` out of a refused response, falling back
/// to a generic status line.
#[cfg(feature = "hydrate")]
async fn rejection_message(response: &gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    if let Ok(body) = response.json::<ErrorBody>().await {
        if let Some(message) = body.message {
            return message;
        }
    }
    format!("request failed with status {}", response.status())
}

#[cfg(feature = "hydrate")]
async fn dispatch<T: DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    use gloo_net::http::RequestBuilder;

    let url = format!("{API_BASE}{path}");
    let (token, _) = session_store::read();
    let sent_token = token.is_some();

    let mut builder = RequestBuilder::new(&url).method(method);
    if let Some(token) = &token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let request = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    match classify(status, sent_token) {
        StatusAction::Expire => {
            expire_session();
            Err(ApiError::SessionExpired)
        }
        StatusAction::Forbid => Err(ApiError::Permission),
        StatusAction::ServerFail => Err(ApiError::Server(status)),
        StatusAction::Pass => {
            if response.ok() {
                // A 2xx body we cannot decode is a backend fault.
                response.json::<T>().await.map_err(|_| ApiError::Server(status))
            } else {
                Err(ApiError::Rejected(rejection_message(&response).await))
            }
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(gloo_net::http::Method::GET, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(gloo_net::http::Method::POST, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(gloo_net::http::Method::PUT, path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(gloo_net::http::Method::DELETE, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
