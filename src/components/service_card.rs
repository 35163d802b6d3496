//! Catalog card for a single repair service.

use leptos::prelude::*;

use crate::net::types::Service;

/// Service summary card. Edit/delete controls only render when the parent
/// wires the callbacks (admin pages).
#[component]
pub fn ServiceCard(
    service: Service,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Service>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let active = service.active;
    let for_edit = service.clone();
    let id = service.id.clone();

    view! {
        <div class="service-card">
            <header class="service-card__header">
                <h3 class="service-card__name">{service.name.clone()}</h3>
                {(!active).then(|| view! { <span class="service-card__inactive">"Inactive"</span> })}
            </header>
            <p class="service-card__description">{service.description.clone()}</p>
            <p class="service-card__meta">
                {format!("${:.2} \u{00b7} {} min", service.price, service.duration)}
            </p>
            <footer class="service-card__actions">
                {on_edit.map(|cb| {
                    let service = for_edit.clone();
                    view! {
                        <button class="btn" on:click=move |_| cb.run(service.clone())>
                            "Edit"
                        </button>
                    }
                })}
                {on_delete.map(|cb| {
                    let id = id.clone();
                    view! {
                        <button class="btn btn--danger" on:click=move |_| cb.run(id.clone())>
                            "Delete"
                        </button>
                    }
                })}
            </footer>
        </div>
    }
}
