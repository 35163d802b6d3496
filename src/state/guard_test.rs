use super::*;
use crate::net::types::User;

fn session(admin: bool) -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            email: "a@b.com".to_owned(),
            is_admin: admin,
        },
    }
}

// =============================================================
// Phase gate
// =============================================================

#[test]
fn unsettled_phase_is_always_pending() {
    let s = session(true);
    for phase in [AuthPhase::Initializing, AuthPhase::Verifying] {
        for required in [RouteCapability::Public, RouteCapability::Authenticated, RouteCapability::Admin] {
            assert_eq!(decide(required, phase, None), GuardDecision::Pending);
            assert_eq!(decide(required, phase, Some(&s)), GuardDecision::Pending);
        }
    }
}

// =============================================================
// Settled decisions
// =============================================================

#[test]
fn public_route_allows_anonymous() {
    assert_eq!(
        decide(RouteCapability::Public, AuthPhase::Settled, None),
        GuardDecision::Allow
    );
}

#[test]
fn authenticated_route_redirects_anonymous_to_login() {
    assert_eq!(
        decide(RouteCapability::Authenticated, AuthPhase::Settled, None),
        GuardDecision::RedirectTo {
            path: "/login",
            reason: RedirectReason::Unauthenticated,
        }
    );
}

#[test]
fn authenticated_route_allows_any_session() {
    for admin in [false, true] {
        let s = session(admin);
        assert_eq!(
            decide(RouteCapability::Authenticated, AuthPhase::Settled, Some(&s)),
            GuardDecision::Allow
        );
    }
}

#[test]
fn admin_route_redirects_non_admin_to_dashboard() {
    let s = session(false);
    assert_eq!(
        decide(RouteCapability::Admin, AuthPhase::Settled, Some(&s)),
        GuardDecision::RedirectTo {
            path: "/dashboard",
            reason: RedirectReason::NotAdmin,
        }
    );
}

#[test]
fn admin_route_redirects_anonymous_to_login() {
    assert_eq!(
        decide(RouteCapability::Admin, AuthPhase::Settled, None),
        GuardDecision::RedirectTo {
            path: "/login",
            reason: RedirectReason::Unauthenticated,
        }
    );
}

#[test]
fn admin_route_allows_admin() {
    let s = session(true);
    assert_eq!(
        decide(RouteCapability::Admin, AuthPhase::Settled, Some(&s)),
        GuardDecision::Allow
    );
}
