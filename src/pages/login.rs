//! Login page.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::navbar::NavBar;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <NavBar/>
            <main class="auth-page__main">
                <h1 class="auth-page__title">"Welcome back"</h1>
                <p class="auth-page__subtitle">"Sign in to your RepairBuddy account"</p>
                <LoginForm/>
            </main>
        </div>
    }
}
