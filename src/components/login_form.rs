//! Login Form Component
//!
//! Exchanges credentials for a session; the auth protocol itself lives in
//! the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::use_api;
use crate::notify::use_notifier;
use crate::session::use_session;

#[component]
pub fn LoginForm(#[prop(optional, into)] on_success: Option<Callback<()>>) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        set_busy.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(new_session) => {
                    notifier.success(format!("Signed in as {}", new_session.user.name));
                    session.log_in(&api, new_session);
                    if let Some(cb) = on_success {
                        cb.run(());
                    }
                }
                Err(e) => notifier.error(format!("Sign-in failed: {}", e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="University email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_password.set(input.value());
                }
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
