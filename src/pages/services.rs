//! Service catalog management page.

use leptos::prelude::*;

use crate::components::navbar::NavBar;
use crate::components::service_form::ServiceForm;
use crate::components::service_list::ServiceList;
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::ServiceUpdate;
use crate::net::types::{CreateServiceData, Service};
use crate::state::toast::ToastState;

/// Catalog management: list, create, edit, and delete services. Mounted
/// behind `RequireAuth admin=true`; customers browse the catalog on the
/// home page instead.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let services = LocalResource::new(|| api::fetch_services());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Service>);
    let deleting = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_add = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let on_edit = Callback::new(move |service: Service| {
        editing.set(Some(service));
        show_form.set(true);
    });
    let on_delete = Callback::new(move |id: String| deleting.set(Some(id)));
    let on_cancel = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
    });

    let on_submit = Callback::new(move |data: CreateServiceData| {
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let current = editing.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match &current {
                    Some(service) => api::update_service(
                        &service.id,
                        &ServiceUpdate {
                            name: Some(data.name.clone()),
                            description: Some(data.description.clone()),
                            price: Some(data.price),
                            duration: Some(data.duration),
                        },
                    )
                    .await
                    .map(|_| "Service updated successfully"),
                    None => api::create_service(&data)
                        .await
                        .map(|_| "Service created successfully"),
                };
                busy.set(false);
                match result {
                    Ok(message) => {
                        crate::state::toast::success(toasts, message);
                        show_form.set(false);
                        editing.set(None);
                        services.refetch();
                    }
                    Err(err) => crate::state::toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = data;
    });

    let confirm_delete = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = deleting.get_untracked() else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let result = api::delete_service(&id).await;
                busy.set(false);
                deleting.set(None);
                match result {
                    Ok(_) => {
                        crate::state::toast::success(toasts, "Service deleted successfully");
                        services.refetch();
                    }
                    Err(err) => crate::state::toast::error(toasts, err.to_string()),
                }
            });
        }
    });

    view! {
        <div class="services-page">
            <NavBar/>

            <main class="services-page__main">
                <header class="services-page__header">
                    <div>
                        <h1>"Services"</h1>
                        <p class="services-page__subtitle">"Manage the repair service catalog"</p>
                    </div>
                    <button class="btn btn--primary" on:click=on_add>"+ Add Service"</button>
                </header>

                <ServiceList services=services on_edit=Some(on_edit) on_delete=Some(on_delete)/>

                <Show when=move || show_form.get()>
                    <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                {move || if editing.get().is_some() { "Edit Service" } else { "Add Service" }}
                            </h2>
                            {move || match editing.get() {
                                Some(service) => view! {
                                    <ServiceForm on_submit=on_submit busy=busy initial=service/>
                                }
                                .into_any(),
                                None => view! { <ServiceForm on_submit=on_submit busy=busy/> }.into_any(),
                            }}
                            <button class="btn dialog__cancel" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || deleting.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| deleting.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Delete Service"</h2>
                            <p>
                                "This removes the service from the catalog. Existing repair requests keep their records."
                            </p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| deleting.set(None)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    disabled=move || busy.get()
                                    on:click=move |_| confirm_delete.run(())
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}
