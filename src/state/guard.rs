//! Route guard: a pure decision over required capability, auth phase, and
//! session. Evaluated on every route change and every phase change; no
//! hidden state, so the same inputs always produce the same decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::auth::{AuthPhase, Session};

/// What a route requires of the visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteCapability {
    #[default]
    Public,
    Authenticated,
    Admin,
}

/// Why a redirect was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    Unauthenticated,
    NotAdmin,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verification has not settled: render a neutral pending view and do
    /// not redirect yet, or a reload would flicker through the login page.
    Pending,
    Allow,
    RedirectTo {
        path: &'static str,
        reason: RedirectReason,
    },
}

/// Decide whether the target route may render.
pub fn decide(required: RouteCapability, phase: AuthPhase, session: Option<&Session>) -> GuardDecision {
    if phase != AuthPhase::Settled {
        return GuardDecision::Pending;
    }
    match required {
        RouteCapability::Public => GuardDecision::Allow,
        RouteCapability::Authenticated | RouteCapability::Admin => {
            let Some(session) = session else {
                return GuardDecision::RedirectTo {
                    path: "/login",
                    reason: RedirectReason::Unauthenticated,
                };
            };
            if required == RouteCapability::Admin && !session.user.is_admin {
                return GuardDecision::RedirectTo {
                    path: "/dashboard",
                    reason: RedirectReason::NotAdmin,
                };
            }
            GuardDecision::Allow
        }
    }
}
