//! Repair request listings.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::repair_card::{AdminRepairCard, RepairCard};
use crate::net::api;
use crate::state::auth::AuthState;

/// The current user's repair requests, optionally capped (the dashboard
/// shows a short preview).
#[component]
pub fn RepairList(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let navigate = use_navigate();
    let on_view = Callback::new(move |id: String| {
        navigate(&format!("/repairs/{id}"), NavigateOptions::default());
    });
    let repairs = LocalResource::new(|| api::fetch_user_repairs());

    view! {
        <Suspense fallback=move || view! { <p class="list-note">"Loading repair requests..."</p> }>
            {move || {
                repairs.get().map(|result| match result {
                    Ok(list) => {
                        if list.is_empty() {
                            view! {
                                <div class="list-empty">
                                    <p>"No repair requests found. Create a new one to get started."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            let shown: Vec<_> = match limit {
                                Some(n) => list.into_iter().take(n).collect(),
                                None => list,
                            };
                            view! {
                                <div class="card-grid">
                                    {shown
                                        .into_iter()
                                        .map(|repair| view! { <RepairCard repair=repair on_view=on_view/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                    Err(err) => {
                        view! { <div class="list-error"><p>{err.to_string()}</p></div> }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}

/// Every repair request in the system, customer and service joined in.
/// Renders a permission note instead of fetching for non-admin sessions.
#[component]
pub fn AdminRepairList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let on_view = Callback::new(move |id: String| {
        navigate(&format!("/repairs/{id}"), NavigateOptions::default());
    });
    let repairs = LocalResource::new(move || {
        let admin = auth.get().is_admin();
        async move {
            if admin {
                api::fetch_all_repairs().await
            } else {
                Ok(Vec::new())
            }
        }
    });

    view! {
        <Show
            when=move || auth.get().is_admin()
            fallback=|| {
                view! {
                    <div class="list-error">
                        <p>"You don't have permission to view this page."</p>
                    </div>
                }
            }
        >
            <Suspense fallback=move || view! { <p class="list-note">"Loading repair requests..."</p> }>
                {move || {
                    repairs.get().map(|result| match result {
                        Ok(list) => {
                            if list.is_empty() {
                                view! {
                                    <div class="list-empty">
                                        <p>"No repair requests found."</p>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|repair| view! { <AdminRepairCard repair=repair on_view=on_view/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => {
                            view! { <div class="list-error"><p>{err.to_string()}</p></div> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </Show>
    }
}
