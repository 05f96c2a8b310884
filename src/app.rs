//! FundDesk Frontend App
//!
//! Root component: builds the injected contexts (API client, auth session,
//! notifier, shared store, navigation) and mounts the page shell.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::Api;
use crate::components::{Shell, ToastStack};
use crate::context::{AppContext, Section};
use crate::notify::Notifier;
use crate::session::AuthSession;
use crate::store::{store_set_document_types, store_set_funds, AppState};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (section, set_section) = signal(Section::Announcements);

    let api = Api::new();
    let session = AuthSession::new();
    let notifier = Notifier::new();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(api.clone());
    provide_context(session);
    provide_context(notifier);
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (section, set_section),
    ));

    // Reference data the panels share (fund selectors, budget grouping,
    // required-document hints); refreshed on login and on any mutation.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let trigger = reload_trigger.get();
            if !session.is_authenticated() {
                return;
            }
            web_sys::console::log_1(
                &format!("[APP] Loading reference data, trigger={}", trigger).into(),
            );
            let api = api.clone();
            spawn_local(async move {
                match api.list_funds().await {
                    Ok(funds) => store_set_funds(&store, funds),
                    Err(e) => web_sys::console::error_1(
                        &format!("[APP] Loading funds failed: {}", e).into(),
                    ),
                }
                match api.list_document_types().await {
                    Ok(types) => store_set_document_types(&store, types),
                    Err(e) => web_sys::console::error_1(
                        &format!("[APP] Loading document types failed: {}", e).into(),
                    ),
                }
            });
        });
    }

    view! {
        <Shell />
        <ToastStack />
    }
}
