//! Account registration form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Rough shape check, mirroring the backend's own email validation.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Registration form. Registration never signs the user in; on success the
/// returned intent navigates to the login page for an explicit login.
#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }

        let mut valid = true;
        let email_value = email.get_untracked();
        if email_value.trim().is_empty() {
            email_error.set(Some("Email is required"));
            valid = false;
        } else if !looks_like_email(email_value.trim()) {
            email_error.set(Some("Email is invalid"));
            valid = false;
        } else {
            email_error.set(None);
        }

        let password_value = password.get_untracked();
        if password_value.is_empty() {
            password_error.set(Some("Password is required"));
            valid = false;
        } else if password_value.len() < 6 {
            password_error.set(Some("Password must be at least 6 characters"));
            valid = false;
        } else {
            password_error.set(None);
        }

        if confirm.get_untracked() != password_value {
            confirm_error.set(Some("Passwords do not match"));
            valid = false;
        } else {
            confirm_error.set(None);
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
                    crate::state::auth::register(auth, email_value.trim(), &password_value).await;
                busy.set(false);
                match result {
                    Ok(crate::state::auth::NavigateTo(path)) => {
                        crate::state::toast::success(toasts, "Registration successful! Please log in.");
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

            <label class="auth-form__label">
                "Confirm Password"
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            {move || {
                confirm_error.get().map(|msg| view! { <p class="auth-form__field-error">{msg}</p> })
            }}

            {move || {
                auth.get().error.map(|msg| view! { <p class="auth-form__error">{msg}</p> })
            }}

            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating account..." } else { "Create Account" }}
            </button>

            <p class="auth-form__switch">
                "Already have an account? " <a href="/login">"Sign in"</a>
            </p>
        </form>
    }
}
