//! Repair request overview page.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::components::repair_list::{AdminRepairList, RepairList};
use crate::state::auth::AuthState;

/// Tabs available to administrators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RepairsTab {
    #[default]
    All,
    Mine,
}

/// Repair requests page. Customers see their own requests; administrators
/// get an extra tab with every request in the system. Mounted behind
/// `RequireAuth`.
#[component]
pub fn RepairsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(RepairsTab::default());

    let tab_class = move |target: RepairsTab| {
        if tab.get() == target {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    view! {
        <div class="repairs-page">
            <NavBar/>

            <main class="repairs-page__main">
                <header class="repairs-page__header">
                    <div>
                        <h1>"Repair Requests"</h1>
                        <p class="repairs-page__subtitle">"Manage your device repair requests"</p>
                    </div>
                    <a href="/repairs/new" class="btn btn--primary">"+ New Repair Request"</a>
                </header>

                <Show
                    when=move || auth.get().is_admin()
                    fallback=|| view! { <RepairList/> }
                >
                    <div class="tabs">
                        <button class=move || tab_class(RepairsTab::All) on:click=move |_| tab.set(RepairsTab::All)>
                            "All Requests"
                        </button>
                        <button class=move || tab_class(RepairsTab::Mine) on:click=move |_| tab.set(RepairsTab::Mine)>
                            "My Requests"
                        </button>
                    </div>
                    <Show
                        when=move || tab.get() == RepairsTab::All
                        fallback=|| view! { <RepairList/> }
                    >
                        <AdminRepairList/>
                    </Show>
                </Show>
            </main>

            <footer class="page-footer">
                <p>"RepairBuddy. All rights reserved."</p>
            </footer>
        </div>
    }
}
