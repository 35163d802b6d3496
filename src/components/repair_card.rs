//! Cards summarizing repair requests.

use leptos::prelude::*;

use crate::net::types::{PopulatedRepairRequest, RepairRequest, date_part};

/// First few characters of a backend id, enough to tell cards apart.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Card for the owner's view of a repair request.
#[component]
pub fn RepairCard(repair: RepairRequest, on_view: Callback<String>) -> impl IntoView {
    let id = repair.id.clone();
    view! {
        <div class="repair-card">
            <header class="repair-card__header">
                <div>
                    <h3 class="repair-card__title">{format!("Repair #{}", short_id(&repair.id))}</h3>
                    <p class="repair-card__date">{date_part(&repair.created_at).to_owned()}</p>
                </div>
                <span class=repair.status.badge_class()>{repair.status.label()}</span>
            </header>
            <p class="repair-card__description">{repair.description.clone()}</p>
            <p class="repair-card__cost">{format!("Budget: ${:.2}", repair.estimated_cost)}</p>
            <footer class="repair-card__actions">
                <button class="btn" on:click=move |_| on_view.run(id.clone())>
                    "View Details"
                </button>
            </footer>
        </div>
    }
}

/// Card for the admin view, with customer and service records joined in.
#[component]
pub fn AdminRepairCard(repair: PopulatedRepairRequest, on_view: Callback<String>) -> impl IntoView {
    let id = repair.id.clone();
    view! {
        <div class="repair-card repair-card--admin">
            <header class="repair-card__header">
                <div>
                    <h3 class="repair-card__title">{repair.service_id.name.clone()}</h3>
                    <p class="repair-card__date">{date_part(&repair.created_at).to_owned()}</p>
                </div>
                <span class=repair.status.badge_class()>{repair.status.label()}</span>
            </header>
            <p class="repair-card__customer">
                <span class="repair-card__field">"Customer: "</span>
                {repair.user_id.email.clone()}
            </p>
            <p class="repair-card__description">{repair.description.clone()}</p>
            <p class="repair-card__cost">
                {format!(
                    "Listed: ${:.2} \u{00b7} Budget: ${:.2}",
                    repair.service_id.price,
                    repair.estimated_cost,
                )}
            </p>
            <footer class="repair-card__actions">
                <button class="btn" on:click=move |_| on_view.run(id.clone())>
                    "View Details"
                </button>
            </footer>
        </div>
    }
}
