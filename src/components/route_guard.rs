//! Guard component wrapping pages that require authentication.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::guard::{self, GuardDecision, RedirectReason, RouteCapability};

/// Renders its children once the auth controller has settled and the route
/// guard allows access.
///
/// Until the phase settles a neutral pending view is shown instead of a
/// redirect, so a page reload does not flicker through the login page.
/// When access is denied the originally requested path is recorded as the
/// pending redirect, letting a successful login return the user here.
#[component]
pub fn RequireAuth(children: ChildrenFn, #[prop(optional)] admin: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let required = if admin {
        RouteCapability::Admin
    } else {
        RouteCapability::Authenticated
    };

    // Re-verify against the store on every mount. Idempotent; the store is
    // the source of truth, so repeated checks are safe.
    Effect::new(move || {
        auth.update(|state| {
            let _ = state.check_auth_status();
        });
    });

    Effect::new(move || {
        let state = auth.get();
        if let GuardDecision::RedirectTo { path, reason } =
            guard::decide(required, state.phase, state.session.as_ref())
        {
            if reason == RedirectReason::Unauthenticated {
                let from = location.pathname.get_untracked();
                // Only write when the value changes, or this effect would
                // retrigger itself through the auth signal.
                if state.pending_redirect.as_deref() != Some(from.as_str()) {
                    auth.update(|s| s.pending_redirect = Some(from));
                }
            }
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            let state = auth.get();
            match guard::decide(required, state.phase, state.session.as_ref()) {
                GuardDecision::Allow => children().into_any(),
                GuardDecision::Pending => view! {
                    <div class="route-guard__pending">
                        <span class="route-guard__spinner"></span>
                    </div>
                }
                .into_any(),
                // The redirect effect takes it from here.
                GuardDecision::RedirectTo { .. } => ().into_any(),
            }
        }}
    }
}
