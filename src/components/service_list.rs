//! Service catalog listing.

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::net::error::ApiError;
use crate::net::types::Service;

/// Grid of service cards over a caller-owned resource, so pages that
/// mutate the catalog can refetch the same data the list renders.
#[component]
pub fn ServiceList(
    services: LocalResource<Result<Vec<Service>, ApiError>>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Service>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <p class="list-note">"Loading services..."</p> }>
            {move || {
                services.get().map(|result| match result {
                    Ok(list) => {
                        if list.is_empty() {
                            view! {
                                <div class="list-empty">
                                    <p>"No services available at the moment."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            view! {
                                                <ServiceCard
                                                    service=service
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
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
