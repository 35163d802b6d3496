//! New repair request page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::NavBar;
use crate::components::repair_form::RepairRequestForm;
use crate::net::api;

/// Page hosting the repair request form; the service catalog must load
/// before the form can offer a picker. Mounted behind `RequireAuth`.
#[component]
pub fn NewRepairPage() -> impl IntoView {
    let navigate = use_navigate();
    let services = LocalResource::new(|| api::fetch_services());

    let on_success = Callback::new(move |()| {
        navigate("/repairs", NavigateOptions::default());
    });

    view! {
        <div class="new-repair-page">
            <NavBar/>

            <main class="new-repair-page__main">
                <a href="/repairs" class="new-repair-page__back">"Back to Repairs"</a>
                <h1>"New Repair Request"</h1>
                <p class="new-repair-page__subtitle">"Submit your device repair details"</p>

                <Suspense fallback=move || view! { <p class="list-note">"Loading services..."</p> }>
                    {move || {
                        services.get().map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <div class="list-empty">
                                            <p>"No services available at the moment"</p>
                                            <a href="/repairs" class="btn">"Go Back"</a>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="new-repair-page__form">
                                            <RepairRequestForm services=list on_success=on_success/>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <div class="list-error">
                                        <p>"Failed to load services"</p>
                                        <a href="/repairs" class="btn">"Go Back"</a>
                                    </div>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
