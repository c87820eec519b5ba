//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Renders every queued toast in the top-right corner. Each toast carries
/// its own dismiss button; auto-dismissal is scheduled where the toast is
/// pushed, not here.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.class())>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
