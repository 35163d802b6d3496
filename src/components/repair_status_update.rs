//! Admin control for moving a repair through its lifecycle.

use leptos::prelude::*;

use crate::net::types::RepairStatus;
use crate::state::toast::ToastState;

/// Status select plus an update button, disabled while a call is in
/// flight or when the selection matches the current status.
#[component]
pub fn RepairStatusUpdate(
    repair_id: String,
    current: RepairStatus,
    on_updated: Callback<RepairStatus>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, on_updated);

    let selected = RwSignal::new(current);
    let busy = RwSignal::new(false);

    let submit = {
        let repair_id = repair_id.clone();
        Callback::new(move |()| {
            if busy.get_untracked() || selected.get_untracked() == current {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let repair_id = repair_id.clone();
                let status = selected.get_untracked();
                busy.set(true);
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::update_repair_status(&repair_id, status).await;
                    busy.set(false);
                    match result {
                        Ok(updated) => {
                            crate::state::toast::success(toasts, "Repair status updated successfully");
                            on_updated.run(updated.status);
                        }
                        Err(err) => crate::state::toast::error(toasts, err.to_string()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &repair_id;
            }
        })
    };

    view! {
        <div class="status-update">
            <label class="status-update__label">
                "Update Status"
                <select
                    class="status-update__select"
                    prop:value=move || selected.get().as_wire().to_owned()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(status) =
                            RepairStatus::ALL.iter().copied().find(|s| s.as_wire() == value)
                        {
                            selected.set(status);
                        }
                    }
                >
                    {RepairStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_wire()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <button
                class="btn btn--primary"
                disabled=move || busy.get() || selected.get() == current
                on:click=move |_| submit.run(())
            >
                {move || if busy.get() { "Updating..." } else { "Update" }}
            </button>
        </div>
    }
}
