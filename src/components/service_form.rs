//! Create/edit form for catalog services.

use leptos::prelude::*;

use crate::net::types::{CreateServiceData, Service};

/// Shared form for creating and editing a service.
///
/// Validation mirrors the backend's rules: short names and descriptions
/// are rejected locally, price must be positive, duration a positive
/// whole number of minutes. The parent owns the actual API call and the
/// busy flag.
#[component]
pub fn ServiceForm(
    on_submit: Callback<CreateServiceData>,
    busy: RwSignal<bool>,
    #[prop(optional)] initial: Option<Service>,
) -> impl IntoView {
    let editing = initial.is_some();
    let name = RwSignal::new(initial.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let description =
        RwSignal::new(initial.as_ref().map(|s| s.description.clone()).unwrap_or_default());
    let price =
        RwSignal::new(initial.as_ref().map(|s| format!("{:.2}", s.price)).unwrap_or_default());
    let duration = RwSignal::new(
        initial
            .as_ref()
            .map(|s| s.duration.to_string())
            .unwrap_or_else(|| "30".to_owned()),
    );
    let form_error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        if name_value.len() < 3 {
            form_error.set(Some("Service name must be at least 3 characters"));
            return;
        }
        let description_value = description.get_untracked().trim().to_owned();
        if description_value.len() < 10 {
            form_error.set(Some("Description must be at least 10 characters"));
            return;
        }
        let Ok(price_value) = price.get_untracked().trim().parse::<f64>() else {
            form_error.set(Some("Price must be a positive number"));
            return;
        };
        if price_value <= 0.0 {
            form_error.set(Some("Price must be a positive number"));
            return;
        }
        let Ok(duration_value) = duration.get_untracked().trim().parse::<u32>() else {
            form_error.set(Some("Duration must be a positive integer"));
            return;
        };
        if duration_value == 0 {
            form_error.set(Some("Duration must be a positive integer"));
            return;
        }
        form_error.set(None);

        on_submit.run(CreateServiceData {
            name: name_value,
            description: description_value,
            price: price_value,
            duration: duration_value,
        });
    });

    view! {
        <form
            class="service-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label class="service-form__label">
                "Service Name"
                <input
                    class="service-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>

            <label class="service-form__label">
                "Description"
                <textarea
                    class="service-form__textarea"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="service-form__label">
                "Price (USD)"
                <input
                    class="service-form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
            </label>

            <label class="service-form__label">
                "Duration (minutes)"
                <input
                    class="service-form__input"
                    type="number"
                    min="1"
                    step="1"
                    prop:value=move || duration.get()
                    on:input=move |ev| duration.set(event_target_value(&ev))
                />
            </label>

            {move || form_error.get().map(|msg| view! { <p class="service-form__error">{msg}</p> })}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() {
                        "Saving..."
                    } else if editing {
                        "Save Changes"
                    } else {
                        "Create Service"
                    }
                }}
            </button>
        </form>
    }
}
