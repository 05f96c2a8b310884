//! Page Shell
//!
//! Header, collapsible side navigation, and the content area switching on
//! the active section. The section set a visitor sees follows their role.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{
    AnnouncementBoard, AnnouncementsPanel, DocumentTypesPanel, FundBudgetPanel, FundFormBoard,
    FundFormsPanel, InstallmentPanel, LoginForm, Modal, ProfilePanel, ProjectsPanel, RequireRole,
};
use crate::context::{use_app_context, Section};
use crate::session::use_session;

#[component]
fn Header() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let ctx = use_app_context();

    let (show_login, set_show_login) = signal(false);

    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            // Best-effort server-side logout; the local session clears either way.
            let _ = api.logout().await;
            session.log_out(&api);
        });
        ctx.go_to(Section::Announcements);
    };

    view! {
        <header class="app-header">
            <span class="app-title">"FundDesk"</span>
            <span class="header-spacer"></span>
            {move || match session.user() {
                Some(user) => view! {
                    <span class="header-user">{user.name}</span>
                    <button class="logout-btn" on:click=on_logout.clone()>"Sign out"</button>
                }
                .into_any(),
                None => view! {
                    <button class="login-btn" on:click=move |_| set_show_login.set(true)>
                        "Sign in"
                    </button>
                }
                .into_any(),
            }}

            {move || show_login.get().then(|| view! {
                <Modal title="Sign in" on_close=move |_| set_show_login.set(false)>
                    <LoginForm on_success=Callback::new(move |_| set_show_login.set(false)) />
                </Modal>
            })}
        </header>
    }
}

#[component]
fn SideNav() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (collapsed, set_collapsed) = signal(false);

    view! {
        <nav class=move || if collapsed.get() { "side-nav collapsed" } else { "side-nav" }>
            <button
                class="nav-collapse-btn"
                on:click=move |_| set_collapsed.update(|v| *v = !*v)
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>

            <Show when=move || !collapsed.get()>
                {move || {
                    let role = session.role();
                    Section::ALL
                        .iter()
                        .filter(|s| s.visible_to(role))
                        .map(|&section| {
                            let is_active = move || ctx.section.get() == section;
                            let item_class = move || {
                                if is_active() { "nav-item active" } else { "nav-item" }
                            };
                            view! {
                                <button class=item_class on:click=move |_| ctx.go_to(section)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </nav>
    }
}

/// Content area: administrators manage the orderable lists, everyone else
/// gets the read-only boards; the remaining sections are role-guarded.
#[component]
fn SectionView() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    view! {
        {move || match ctx.section.get() {
            Section::Announcements => {
                if session.is_admin() {
                    view! { <AnnouncementsPanel /> }.into_any()
                } else {
                    view! { <AnnouncementBoard /> }.into_any()
                }
            }
            Section::FundForms => {
                if session.is_admin() {
                    view! { <FundFormsPanel /> }.into_any()
                } else {
                    view! { <FundFormBoard /> }.into_any()
                }
            }
            Section::Projects => view! {
                <RequireRole>
                    <ProjectsPanel />
                </RequireRole>
            }
            .into_any(),
            Section::Budgets => view! {
                <RequireRole admin_only=true>
                    <FundBudgetPanel />
                </RequireRole>
            }
            .into_any(),
            Section::Installments => view! {
                <RequireRole admin_only=true>
                    <InstallmentPanel />
                </RequireRole>
            }
            .into_any(),
            Section::DocumentTypes => view! {
                <RequireRole admin_only=true>
                    <DocumentTypesPanel />
                </RequireRole>
            }
            .into_any(),
            Section::Profile => view! {
                <RequireRole>
                    <ProfilePanel />
                </RequireRole>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <SideNav />
                <main class="main-content">
                    <SectionView />
                </main>
            </div>
        </div>
    }
}
