//! Landing page with the service catalog preview.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::components::service_list::ServiceList;
use crate::net::api;
use crate::state::auth::AuthState;

/// Public landing page: hero with session-aware calls to action, plus a
/// browseable preview of the repair catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = LocalResource::new(|| api::fetch_services());

    view! {
        <div class="home-page">
            <NavBar/>

            <main class="home-page__main">
                <section class="home-page__hero">
                    <h1 class="home-page__title">
                        "Fast & reliable electronics repair"
                    </h1>
                    <p class="home-page__subtitle">
                        "Track your repair status, talk to technicians, and manage your devices in one place."
                    </p>
                    <div class="home-page__cta">
                        <Show
                            when=move || auth.get().is_authenticated()
                            fallback=|| {
                                view! {
                                    <a href="/register" class="btn btn--primary">"Get Started"</a>
                                    <a href="/login" class="btn">"Sign In"</a>
                                }
                            }
                        >
                            <a href="/dashboard" class="btn btn--primary">"Go to Dashboard"</a>
                        </Show>
                    </div>
                </section>

                <section class="home-page__services">
                    <h2>"Our Services"</h2>
                    <ServiceList services=services/>
                </section>
            </main>

            <footer class="page-footer">
                <p>"RepairBuddy. All rights reserved."</p>
            </footer>
        </div>
    }
}
