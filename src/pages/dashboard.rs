//! Customer dashboard with a short repair request overview.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::components::repair_list::RepairList;
use crate::state::auth::AuthState;

/// Dashboard page showing a greeting and the most recent repair requests.
/// Mounted behind `RequireAuth`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user()
            .map(|u| format!("Welcome back, {}", u.email))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>

            <main class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__greeting">{greeting}</p>
                </header>

                <section class="dashboard-page__repairs">
                    <div class="dashboard-page__section-header">
                        <h2>"Your Repair Requests"</h2>
                        <a href="/repairs/new" class="btn btn--primary">"+ New Repair Request"</a>
                    </div>
                    <RepairList limit=3/>
                    <a href="/repairs" class="dashboard-page__all-link">"View all requests"</a>
                </section>
            </main>

            <footer class="page-footer">
                <p>"RepairBuddy. All rights reserved."</p>
            </footer>
        </div>
    }
}
