//! Fund Forms Panel
//!
//! Admin management of downloadable fund forms: create/edit/delete plus the
//! same drag reordering protocol as announcements. The two panels hold
//! separate controller instances; forms cannot be dragged into the
//! announcement list or vice versa.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_orderable::{
    bind_global_listeners, create_list_dnd, make_on_mousedown, make_on_row_mouseenter,
    make_on_row_mouseleave, PersistError,
};

use crate::api::{use_api, FundFormDraft};
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::models::FundForm;
use crate::notify::use_notifier;

#[component]
pub fn FundFormsPanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let dnd = create_list_dnd::<FundForm>();
    bind_global_listeners(dnd);

    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (creating, set_creating) = signal(false);
    let (editing, set_editing) = signal::<Option<FundForm>>(None);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_fund_forms().await {
                    Ok(rows) => dnd.list.update(|l| l.load(rows)),
                    Err(e) => {
                        notifier.error(format!("Loading fund forms failed: {}", e));
                        dnd.list.update(|l| l.load(Vec::new()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let dirty = move || dnd.list.with(|l| l.is_dirty());

    let save_order = {
        let api = api.clone();
        move |_| {
            if saving.get() {
                return;
            }
            set_saving.set(true);
            let api = api.clone();
            spawn_local(async move {
                let mut list = dnd.list.get_untracked();
                let result = list
                    .persist(|id, position| {
                        let api = api.clone();
                        async move { api.update_fund_form_order(id, position).await }
                    })
                    .await;
                match result {
                    Ok(count) => {
                        dnd.list.set(list);
                        notifier.success(format!("Saved order of {} forms", count));
                        ctx.reload();
                    }
                    Err(PersistError::NothingToSave) => {
                        notifier.warn("The order has no unsaved changes");
                    }
                    Err(err @ PersistError::Failed(_)) => {
                        notifier.error(format!("Saving order failed: {}", err));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Fund Forms"</h2>
                <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                    "New form"
                </button>
            </div>

            <div class="order-bar">
                <button
                    class="save-order-btn"
                    disabled=move || !dirty() || saving.get()
                    on:click=save_order
                >
                    {move || if saving.get() { "Saving..." } else { "Save order" }}
                </button>
                {move || dirty().then(|| view! {
                    <span class="order-hint">"Unsaved order changes"</span>
                })}
            </div>

            <Show when=move || loading.get()>
                <div class="loading-note">"Loading..."</div>
            </Show>

            <div class=move || if saving.get() { "orderable-rows busy" } else { "orderable-rows" }>
                <For
                    each=move || dnd.list.with(|l| l.items().to_vec())
                    key=|f| {
                        // Tuple of mutable fields so edits re-render the row
                        (f.id, f.name.clone(), f.active, f.display_order)
                    }
                    children=move |form: FundForm| {
                        let id = form.id;
                        let on_mousedown = make_on_mousedown(dnd, id);
                        let on_mouseenter = make_on_row_mouseenter(dnd, id);
                        let on_mouseleave = make_on_row_mouseleave(dnd);

                        let is_dragging = move || dnd.list.with(|l| l.dragging() == Some(id));
                        let is_drag_over = move || {
                            dnd.list.with(|l| {
                                l.over() == Some(id)
                                    && l.dragging().is_some()
                                    && l.dragging() != Some(id)
                            })
                        };
                        let row_class = move || {
                            let mut c = String::from("orderable-row");
                            if is_dragging() { c.push_str(" dragging"); }
                            if is_drag_over() { c.push_str(" drag-over"); }
                            c
                        };

                        let edit_target = form.clone();
                        let del_api = row_api.clone();
                        let on_delete = Callback::new(move |_| {
                            let api = del_api.clone();
                            spawn_local(async move {
                                match api.delete_fund_form(id).await {
                                    Ok(()) => {
                                        notifier.success("Form deleted");
                                        ctx.reload();
                                    }
                                    Err(e) => notifier.error(format!("Delete failed: {}", e)),
                                }
                            });
                        });

                        view! {
                            <div
                                class=row_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <span class="drag-handle">"⋮⋮"</span>
                                <span class="row-title">{form.name.clone()}</span>
                                {(!form.active).then(|| view! {
                                    <span class="badge inactive">"Inactive"</span>
                                })}
                                <span class="row-spacer"></span>
                                <button
                                    class="edit-btn"
                                    on:click=move |_| set_editing.set(Some(edit_target.clone()))
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=on_delete
                                />
                            </div>
                        }
                    }
                />
            </div>

            {move || (!loading.get() && dnd.list.with(|l| l.is_empty())).then(|| view! {
                <div class="empty-note">"No fund forms yet"</div>
            })}

            {move || creating.get().then(|| view! {
                <Modal title="New form" on_close=move |_| set_creating.set(false)>
                    <FundFormForm existing=None on_done=move |_| set_creating.set(false) />
                </Modal>
            })}

            {move || editing.get().map(|form| view! {
                <Modal title="Edit form" on_close=move |_| set_editing.set(None)>
                    <FundFormForm existing=Some(form) on_done=move |_| set_editing.set(None) />
                </Modal>
            })}
        </div>
    }
}

#[component]
fn FundFormForm(existing: Option<FundForm>, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id = existing.as_ref().map(|f| f.id);
    let (name, set_name) = signal(existing.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(existing.as_ref().map(|f| f.description.clone()).unwrap_or_default());
    let (file_url, set_file_url) =
        signal(existing.as_ref().map(|f| f.file_url.clone()).unwrap_or_default());
    let (active, set_active) = signal(existing.as_ref().map(|f| f.active).unwrap_or(true));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let file_url_value = file_url.get();
        if name_value.trim().is_empty() || file_url_value.trim().is_empty() {
            return;
        }
        let description_value = description.get();
        let active_value = active.get();

        let api = api.clone();
        spawn_local(async move {
            let draft = FundFormDraft {
                name: &name_value,
                description: &description_value,
                file_url: &file_url_value,
                active: active_value,
            };
            let result = match id {
                Some(id) => api.update_fund_form(id, &draft).await.map(|_| ()),
                None => api.create_fund_form(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notifier.success(if id.is_some() { "Form updated" } else { "Form created" });
                    ctx.reload();
                    on_done.run(());
                }
                Err(e) => notifier.error(format!("Saving form failed: {}", e)),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Form name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="File URL"
                prop:value=move || file_url.get()
                on:input=move |ev| set_file_url.set(event_target_value(&ev))
            />
            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || active.get()
                    on:change=move |_| set_active.update(|v| *v = !*v)
                />
                "Active"
            </label>
            <div class="form-actions">
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
