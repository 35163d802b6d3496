//! Registration page.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::components::register_form::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <NavBar/>
            <main class="auth-page__main">
                <h1 class="auth-page__title">"Create your account"</h1>
                <p class="auth-page__subtitle">"Get your devices repaired by professionals"</p>
                <RegisterForm/>
            </main>
        </div>
    }
}
