//! Toast Stack Component
//!
//! Renders the notifier's queue; a click dismisses early.

use leptos::prelude::*;

use crate::notify::use_notifier;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| notifier.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
