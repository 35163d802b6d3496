use super::*;

// =============================================================
// Displayable messages
// =============================================================

#[test]
fn rejected_displays_the_backend_message_verbatim() {
    let err = ApiError::Rejected("Email already registered".to_owned());
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn session_expired_tells_the_user_to_log_in_again() {
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "your session has expired, please log in again"
    );
}

#[test]
fn server_error_message_does_not_leak_the_status_code() {
    let err = ApiError::Server(502);
    assert!(!err.to_string().contains("502"));
}

#[test]
fn network_error_includes_the_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert!(err.to_string().contains("connection refused"));
}
