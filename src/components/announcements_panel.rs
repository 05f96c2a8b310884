//! Announcements Panel
//!
//! Admin management of announcements: create/edit/delete plus drag
//! reordering with an explicit "Save order" action. The list reloads from
//! the server after every successful mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_orderable::{
    bind_global_listeners, create_list_dnd, make_on_mousedown, make_on_row_mouseenter,
    make_on_row_mouseleave, PersistError,
};

use crate::api::{use_api, AnnouncementDraft};
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::markdown::render_markdown;
use crate::models::Announcement;
use crate::notify::use_notifier;

#[component]
pub fn AnnouncementsPanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let dnd = create_list_dnd::<Announcement>();
    bind_global_listeners(dnd);

    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (creating, set_creating) = signal(false);
    let (editing, set_editing) = signal::<Option<Announcement>>(None);

    // Load on mount and whenever a mutation bumps the trigger
    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_announcements().await {
                    Ok(rows) => dnd.list.update(|l| l.load(rows)),
                    Err(e) => {
                        notifier.error(format!("Loading announcements failed: {}", e));
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
                        async move { api.update_announcement_order(id, position).await }
                    })
                    .await;
                match result {
                    Ok(count) => {
                        dnd.list.set(list);
                        notifier.success(format!("Saved order of {} announcements", count));
                        ctx.reload();
                    }
                    Err(PersistError::NothingToSave) => {
                        notifier.warn("The order has no unsaved changes");
                    }
                    // The arrangement is kept; re-clicking resends every position.
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
                <h2>"Announcements"</h2>
                <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                    "New announcement"
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
                    key=|a| {
                        // Tuple of mutable fields so edits re-render the row
                        (a.id, a.title.clone(), a.published, a.display_order)
                    }
                    children=move |announcement: Announcement| {
                        let id = announcement.id;
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

                        let edit_target = announcement.clone();
                        let del_api = row_api.clone();
                        let on_delete = Callback::new(move |_| {
                            let api = del_api.clone();
                            spawn_local(async move {
                                match api.delete_announcement(id).await {
                                    Ok(()) => {
                                        notifier.success("Announcement deleted");
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
                                <span class="row-title">{announcement.title.clone()}</span>
                                {(!announcement.published).then(|| view! {
                                    <span class="badge draft">"Draft"</span>
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
                <div class="empty-note">"No announcements yet"</div>
            })}

            {move || creating.get().then(|| view! {
                <Modal title="New announcement" on_close=move |_| set_creating.set(false)>
                    <AnnouncementForm existing=None on_done=move |_| set_creating.set(false) />
                </Modal>
            })}

            {move || editing.get().map(|announcement| view! {
                <Modal title="Edit announcement" on_close=move |_| set_editing.set(None)>
                    <AnnouncementForm
                        existing=Some(announcement)
                        on_done=move |_| set_editing.set(None)
                    />
                </Modal>
            })}
        </div>
    }
}

/// Create/edit form with a markdown preview toggle.
#[component]
fn AnnouncementForm(
    existing: Option<Announcement>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id = existing.as_ref().map(|a| a.id);
    let (title, set_title) = signal(existing.as_ref().map(|a| a.title.clone()).unwrap_or_default());
    let (body, set_body) = signal(existing.as_ref().map(|a| a.body.clone()).unwrap_or_default());
    let (published, set_published) = signal(existing.as_ref().map(|a| a.published).unwrap_or(false));
    let (preview, set_preview) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() {
            return;
        }
        let body_value = body.get();
        let published_value = published.get();

        let api = api.clone();
        spawn_local(async move {
            let draft = AnnouncementDraft {
                title: &title_value,
                body: &body_value,
                published: published_value,
            };
            let result = match id {
                Some(id) => api.update_announcement(id, &draft).await.map(|_| ()),
                None => api.create_announcement(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notifier.success(if id.is_some() {
                        "Announcement updated"
                    } else {
                        "Announcement created"
                    });
                    ctx.reload();
                    on_done.run(());
                }
                Err(e) => notifier.error(format!("Saving announcement failed: {}", e)),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />

            {move || if preview.get() {
                view! {
                    <div class="markdown-preview" inner_html=render_markdown(&body.get())></div>
                }
                .into_any()
            } else {
                view! {
                    <textarea
                        placeholder="Body (markdown)"
                        prop:value=move || body.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_body.set(input.value());
                        }
                    ></textarea>
                }
                .into_any()
            }}

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || published.get()
                    on:change=move |_| set_published.update(|v| *v = !*v)
                />
                "Published"
            </label>

            <div class="form-actions">
                <button type="button" on:click=move |_| set_preview.update(|v| *v = !*v)>
                    {move || if preview.get() { "Edit" } else { "Preview" }}
                </button>
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
