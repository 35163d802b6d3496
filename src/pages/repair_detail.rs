//! Repair request detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::NavBar;
use crate::components::repair_status_update::RepairStatusUpdate;
use crate::net::api;
use crate::net::types::{PopulatedRepairRequest, RepairStatus, date_part};
use crate::state::auth::AuthState;

/// Detail view for one repair request. Owner-or-admin only; admins also
/// get the status update control. Mounted behind `RequireAuth`.
#[component]
pub fn RepairDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let repair = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move { api::fetch_repair(&id).await }
    });

    let on_updated = Callback::new(move |_: RepairStatus| repair.refetch());

    view! {
        <div class="repair-detail-page">
            <NavBar/>

            <main class="repair-detail-page__main">
                <a href="/repairs" class="repair-detail-page__back">"Back to Repairs"</a>

                <Suspense fallback=move || view! { <p class="list-note">"Loading repair details..."</p> }>
                    {move || {
                        repair.get().map(|result| match result {
                            Ok(repair) => {
                                let state = auth.get();
                                let authorized = state.is_admin()
                                    || state.user().is_some_and(|u| u.id == repair.user_id.id);
                                if authorized {
                                    let admin = state.is_admin();
                                    view! {
                                        <RepairDetail repair=repair admin=admin on_updated=on_updated/>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="list-error">
                                            <p>"You don't have permission to view this repair."</p>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }
                            Err(err) => {
                                view! { <div class="list-error"><p>{err.to_string()}</p></div> }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

/// Detail body, split out so the page closure stays readable.
#[component]
fn RepairDetail(
    repair: PopulatedRepairRequest,
    admin: bool,
    on_updated: Callback<RepairStatus>,
) -> impl IntoView {
    view! {
        <article class="repair-detail">
            <header class="repair-detail__header">
                <h1>{repair.service_id.name.clone()}</h1>
                <span class=repair.status.badge_class()>{repair.status.label()}</span>
            </header>

            <dl class="repair-detail__facts">
                <dt>"Requested"</dt>
                <dd>{date_part(&repair.created_at).to_owned()}</dd>
                <dt>"Customer"</dt>
                <dd>{repair.user_id.email.clone()}</dd>
                <dt>"Listed price"</dt>
                <dd>{format!("${:.2}", repair.service_id.price)}</dd>
                <dt>"Customer budget"</dt>
                <dd>{format!("${:.2}", repair.estimated_cost)}</dd>
            </dl>

            <section class="repair-detail__description">
                <h2>"Issue Description"</h2>
                <p>{repair.description.clone()}</p>
            </section>

            {admin.then(|| {
                view! {
                    <section class="repair-detail__admin">
                        <RepairStatusUpdate
                            repair_id=repair.id.clone()
                            current=repair.status
                            on_updated=on_updated
                        />
                    </section>
                }
            })}
        </article>
    }
}
