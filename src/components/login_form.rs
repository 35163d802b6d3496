//! Email/password login form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Login form. Field checks run locally and never reach the network; a
/// backend rejection is shown inline (from `AuthState::error`) and as a
/// toast. The submit control is disabled while a call is in flight, which
/// is what keeps login attempts mutually exclusive.
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }

        let mut valid = true;
        if email.get_untracked().trim().is_empty() {
            email_error.set(Some("Email is required"));
            valid = false;
        } else {
            email_error.set(None);
        }
        if password.get_untracked().is_empty() {
            password_error.set(Some("Password is required"));
            valid = false;
        } else {
            password_error.set(None);
        }
        if !valid {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                let email_value = email.get_untracked();
                let password_value = password.get_untracked();
                let result =
                    crate::state::auth::login(auth, email_value.trim(), &password_value).await;
                busy.set(false);
                match result {
                    Ok(crate::state::auth::NavigateTo(path)) => {
                        crate::state::toast::success(toasts, "Login successful");
                        navigate(&path, NavigateOptions::default());
                    }
                    Err(err) => crate::state::toast::error(toasts, err.to_string()),
                }
            });
        }
    });

    view! {
        <form
            class="auth-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            {move || {
                email_error.get().map(|msg| view! { <p class="auth-form__field-error">{msg}</p> })
            }}

            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            {move || {
                password_error.get().map(|msg| view! { <p class="auth-form__field-error">{msg}</p> })
            }}

            {move || {
                auth.get().error.map(|msg| view! { <p class="auth-form__error">{msg}</p> })
            }}

            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign In" }}
            </button>

            <p class="auth-form__switch">
                "Don't have an account? " <a href="/register">"Create account"</a>
            </p>
        </form>
    }
}
