//! Error taxonomy for the REST client layer.
//!
//! Every variant is displayable as-is; pages surface them through toasts
//! and recover locally. [`ApiError::SessionExpired`] is the one kind with a
//! global side effect (store clear + forced navigation), applied by the
//! request pipeline before the error ever reaches a caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response received at all; nothing was mutated.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// A token-carrying request came back 401; the stored session is gone.
    #[error("your session has expired, please log in again")]
    SessionExpired,

    /// 403: the backend refused the operation for this identity.
    #[error("you do not have permission to do that")]
    Permission,

    /// 5xx, or a success body the client could not decode.
    #[error("the server ran into a problem, please try again later")]
    Server(u16),

    /// Any other refused request, carrying the backend's message when it
    /// sent one (failed login, validation rejections, missing records).
    #[error("{0}")]
    Rejected(String),
}
