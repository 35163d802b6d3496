//! Top navigation bar with auth-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, NavigateTo};
use crate::state::toast::{self, ToastState};

/// Site-wide header: brand, navigation links, and session controls.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        if let Some(NavigateTo(path)) = auth.try_update(AuthState::logout) {
            toast::success(toasts, "Logged out successfully");
            navigate(&path, NavigateOptions::default());
        }
    });

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                "Repair"<span class="navbar__brand-accent">"Buddy"</span>
            </a>

            <nav class="navbar__links">
                <a href="/" class="navbar__link">"Home"</a>
                <Show when=move || auth.get().is_authenticated()>
                    <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                    <a href="/repairs" class="navbar__link">"Repairs"</a>
                </Show>
                <Show when=move || auth.get().is_admin()>
                    <a href="/services" class="navbar__link">"Services"</a>
                </Show>
            </nav>

            <div class="navbar__actions">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="btn">"Sign In"</a>
                            <a href="/register" class="btn btn--primary">"Create Account"</a>
                        }
                    }
                >
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
