//! Renders the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed overlay listing active toasts; each can be dismissed early by
/// hand, otherwise the scheduler in [`crate::state::toast`] removes it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
