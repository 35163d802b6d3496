//! New repair request form.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::CreateRepairData;
use crate::net::types::Service;
use crate::state::toast::ToastState;

/// Form for submitting a repair request: service picker, issue
/// description, and budget. Field checks are local; the submit control is
/// disabled while the request is in flight.
#[component]
pub fn RepairRequestForm(
    services: Vec<Service>,
    on_success: Callback<()>,
    #[prop(optional)] service_id: Option<String>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, on_success);

    let preselected = service_id.is_some();
    let selected = RwSignal::new(service_id.unwrap_or_default());
    let description = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let service = selected.get_untracked();
        if service.is_empty() {
            form_error.set(Some("Select a service"));
            return;
        }
        let description_value = description.get_untracked();
        if description_value.trim().is_empty() {
            form_error.set(Some("Describe the issue with your device"));
            return;
        }
        let Ok(estimated_cost) = cost.get_untracked().trim().parse::<f64>() else {
            form_error.set(Some("Budget must be a number"));
            return;
        };
        if estimated_cost < 0.0 {
            form_error.set(Some("Budget cannot be negative"));
            return;
        }
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let data = CreateRepairData {
                service_id: service,
                description: description_value.trim().to_owned(),
                estimated_cost,
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_repair(&data).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        crate::state::toast::success(toasts, "Repair request submitted successfully!");
                        on_success.run(());
                    }
                    Err(err) => crate::state::toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (service, description_value, estimated_cost);
        }
    });

    view! {
        <form
            class="repair-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label class="repair-form__label">
                "Service Type"
                <select
                    class="repair-form__select"
                    prop:value=move || selected.get()
                    disabled=preselected
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="" disabled=true>"Select a service"</option>
                    {services
                        .iter()
                        .map(|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <p class="repair-form__hint">"Select the type of repair service you need"</p>

            <label class="repair-form__label">
                "Issue Description"
                <textarea
                    class="repair-form__textarea"
                    placeholder="Please describe the issue with your device in detail..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <p class="repair-form__hint">
                "Be as specific as possible about the problems you're experiencing"
            </p>

            <label class="repair-form__label">
                "Your Budget (USD)"
                <input
                    class="repair-form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || cost.get()
                    on:input=move |ev| cost.set(event_target_value(&ev))
                />
            </label>

            {move || form_error.get().map(|msg| view! { <p class="repair-form__error">{msg}</p> })}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
            </button>
        </form>
    }
}
