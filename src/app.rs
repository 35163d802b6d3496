//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, new_repair::NewRepairPage,
    register::RegisterPage, repair_detail::RepairDetailPage, repairs::RepairsPage,
    services::ServicesPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // One-time verification pass against the session store. Effects only
    // run in the browser, so the server renders the neutral pending state
    // and the client settles after hydration.
    Effect::new(move || {
        auth.update(AuthState::initialize);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/repairbuddy.css"/>
        <Title text="RepairBuddy"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("repairs")
                    view=|| view! { <RequireAuth><RepairsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("repairs"), StaticSegment("new"))
                    view=|| view! { <RequireAuth><NewRepairPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("repairs"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><RepairDetailPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("services")
                    view=|| view! { <RequireAuth admin=true><ServicesPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
