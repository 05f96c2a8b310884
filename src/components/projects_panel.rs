//! Projects Panel
//!
//! Funding requests: members submit and track their own, administrators
//! review everything and approve or reject. The backend scopes the list to
//! the caller and enforces every transition.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, ProjectDraft};
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::models::{format_amount, Project, ProjectStatus};
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();
    let session = use_session();
    let store = use_app_store();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(false);
    let (creating, set_creating) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_projects().await {
                    Ok(rows) => set_projects.set(rows),
                    Err(e) => notifier.error(format!("Loading projects failed: {}", e)),
                }
                set_loading.set(false);
            });
        });
    }

    let fund_name = move |fund_id: u32| {
        store
            .funds()
            .get()
            .iter()
            .find(|f| f.id == fund_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("Fund #{}", fund_id))
    };

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Projects"</h2>
                <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                    "New request"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-note">"Loading..."</div>
            </Show>

            <For
                each=move || projects.get()
                key=|p| (p.id, p.status, p.amount, p.title.clone())
                children=move |project: Project| {
                    let id = project.id;
                    let status = project.status;
                    let is_admin = session.is_admin();
                    let is_owner = session.user().map(|u| u.id) == Some(project.owner_id);

                    let review_api = row_api.clone();
                    let review = move |status: ProjectStatus| {
                        let api = review_api.clone();
                        spawn_local(async move {
                            match api.update_project_status(id, status).await {
                                Ok(_) => {
                                    notifier.success(format!("Request {}", status.label().to_lowercase()));
                                    ctx.reload();
                                }
                                Err(e) => notifier.error(format!("Review failed: {}", e)),
                            }
                        });
                    };
                    let approve = review.clone();
                    let reject = review.clone();

                    let del_api = row_api.clone();
                    let on_delete = Callback::new(move |_| {
                        let api = del_api.clone();
                        spawn_local(async move {
                            match api.delete_project(id).await {
                                Ok(()) => {
                                    notifier.success("Request deleted");
                                    ctx.reload();
                                }
                                Err(e) => notifier.error(format!("Delete failed: {}", e)),
                            }
                        });
                    });

                    view! {
                        <div class="project-row">
                            <div class="project-main">
                                <span class="row-title">{project.title.clone()}</span>
                                <span class="project-fund">{fund_name(project.fund_id)}</span>
                                <span class="project-amount">{format_amount(project.amount)}</span>
                                <span class=format!("badge status-{}", status.label().to_lowercase())>
                                    {status.label()}
                                </span>
                            </div>
                            <div class="project-meta">
                                {is_admin.then(|| view! {
                                    <span class="project-owner">{project.owner_name.clone()}</span>
                                })}
                                <span class="project-justification">{project.justification.clone()}</span>
                            </div>
                            <div class="project-actions">
                                {(is_admin && status == ProjectStatus::Submitted).then(|| view! {
                                    <button
                                        class="approve-btn"
                                        on:click=move |_| approve(ProjectStatus::Approved)
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        class="reject-btn"
                                        on:click=move |_| reject(ProjectStatus::Rejected)
                                    >
                                        "Reject"
                                    </button>
                                })}
                                {(is_admin || (is_owner && status == ProjectStatus::Submitted))
                                    .then(|| view! {
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=on_delete
                                        />
                                    })}
                            </div>
                        </div>
                    }
                }
            />

            {move || (!loading.get() && projects.get().is_empty()).then(|| view! {
                <div class="empty-note">"No funding requests yet"</div>
            })}

            {move || creating.get().then(|| view! {
                <Modal title="New funding request" on_close=move |_| set_creating.set(false)>
                    <ProjectForm on_done=move |_| set_creating.set(false) />
                </Modal>
            })}
        </div>
    }
}

#[component]
fn ProjectForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (fund_id, set_fund_id) = signal(0u32);
    let (amount, set_amount) = signal(0i64);
    let (justification, set_justification) = signal(String::new());

    let required_documents = move || {
        store
            .document_types()
            .get()
            .into_iter()
            .filter(|dt| dt.required)
            .map(|dt| dt.name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() || fund_id.get() == 0 || amount.get() <= 0 {
            notifier.warn("A title, fund, and positive amount are required");
            return;
        }
        let justification_value = justification.get();

        let api = api.clone();
        spawn_local(async move {
            let draft = ProjectDraft {
                title: &title_value,
                fund_id: fund_id.get_untracked(),
                amount: amount.get_untracked(),
                justification: &justification_value,
            };
            match api.create_project(&draft).await {
                Ok(_) => {
                    notifier.success("Funding request submitted");
                    ctx.reload();
                    on_done.run(());
                }
                Err(e) => notifier.error(format!("Submitting request failed: {}", e)),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Project title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <select on:change=move |ev| {
                let target = ev.target().unwrap();
                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                set_fund_id.set(select.value().parse().unwrap_or(0));
            }>
                <option value="0">"Select a fund"</option>
                <For
                    each=move || store.funds().get()
                    key=|f| f.id
                    children=move |fund| {
                        view! { <option value=fund.id.to_string()>{fund.name}</option> }
                    }
                />
            </select>

            <input
                type="number"
                placeholder="Amount"
                prop:value=move || amount.get().to_string()
                on:input=move |ev| {
                    set_amount.set(event_target_value(&ev).parse().unwrap_or(0));
                }
            />

            <textarea
                placeholder="Justification"
                prop:value=move || justification.get()
                on:input=move |ev| set_justification.set(event_target_value(&ev))
            ></textarea>

            {move || {
                let required = required_documents();
                (!required.is_empty()).then(|| view! {
                    <p class="form-hint">{format!("Required documents: {}", required)}</p>
                })
            }}

            <div class="form-actions">
                <button type="submit" class="primary-btn">"Submit request"</button>
            </div>
        </form>
    }
}
