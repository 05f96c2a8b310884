//! Route Guard
//!
//! Gates role-scoped subtrees on the auth context. The backend enforces
//! authorization on every request; this only decides what to render.

use leptos::prelude::*;

use crate::components::LoginForm;
use crate::session::use_session;

/// Renders children only for a permitted visitor: anonymous visitors get
/// the login form in place, signed-in users without the required role get
/// an access notice.
#[component]
pub fn RequireRole(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if !session.is_authenticated() {
                view! {
                    <div class="guard-login">
                        <p class="guard-note">"Sign in to continue."</p>
                        <LoginForm />
                    </div>
                }
                .into_any()
            } else if admin_only && !session.is_admin() {
                view! {
                    <div class="access-notice">"This section requires administrator access."</div>
                }
                .into_any()
            } else {
                children().into_any()
            }
        }}
    }
}
