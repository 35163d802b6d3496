use super::*;

// =============================================================
// Bearer injection
// =============================================================

#[test]
fn bearer_header_carries_the_token_verbatim() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn unauthorized_with_token_expires_the_session() {
    assert_eq!(classify(401, true), StatusAction::Expire);
}

#[test]
fn unauthorized_without_token_passes_through() {
    // A failed login is the caller's to interpret; it must not clear the
    // (empty) store or force a redirect.
    assert_eq!(classify(401, false), StatusAction::Pass);
}

#[test]
fn forbidden_is_forbid_regardless_of_token() {
    assert_eq!(classify(403, true), StatusAction::Forbid);
    assert_eq!(classify(403, false), StatusAction::Forbid);
}

#[test]
fn server_errors_classify_as_server_failure() {
    for status in [500, 502, 503] {
        assert_eq!(classify(status, true), StatusAction::ServerFail);
        assert_eq!(classify(status, false), StatusAction::ServerFail);
    }
}

#[test]
fn success_and_other_client_errors_pass_through() {
    for status in [200, 201, 204, 400, 404, 409, 422] {
        assert_eq!(classify(status, true), StatusAction::Pass);
        assert_eq!(classify(status, false), StatusAction::Pass);
    }
}
