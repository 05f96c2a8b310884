//! Profile Panel
//!
//! The signed-in user's details plus their publication list with the
//! aggregated citation numbers computed client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, PublicationDraft};
use crate::components::year_tab_bar::current_year;
use crate::components::{DeleteConfirmButton, Modal};
use crate::context::use_app_context;
use crate::metrics::summarize;
use crate::models::Publication;
use crate::notify::use_notifier;
use crate::session::use_session;

const PUBLICATION_KINDS: &[&str] = &["journal", "conference", "book", "other"];

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();
    let session = use_session();

    let (publications, set_publications) = signal(Vec::<Publication>::new());
    let (adding, set_adding) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            spawn_local(async move {
                match api.list_my_publications().await {
                    Ok(rows) => set_publications.set(rows),
                    Err(e) => notifier.error(format!("Loading publications failed: {}", e)),
                }
            });
        });
    }

    let summary = move || summarize(&publications.get());

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Profile"</h2>
            </div>

            {move || session.user().map(|user| view! {
                <div class="profile-card">
                    <span class="profile-name">{user.name}</span>
                    <span class="profile-email">{user.email}</span>
                    <span class="badge role">{user.role.label()}</span>
                </div>
            })}

            <div class="citation-summary">
                <div class="stat">
                    <span class="stat-value">{move || summary().publication_count}</span>
                    <span class="stat-label">"Publications"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || summary().total_citations}</span>
                    <span class="stat-label">"Citations"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || summary().h_index}</span>
                    <span class="stat-label">"h-index"</span>
                </div>
                <div class="by-year">
                    {move || summary()
                        .by_year
                        .into_iter()
                        .map(|(year, count)| view! {
                            <span class="year-chip">{format!("{}: {}", year, count)}</span>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="panel-subheader">
                <h3>"Publications"</h3>
                <button class="primary-btn" on:click=move |_| set_adding.set(true)>
                    "Add publication"
                </button>
            </div>

            <For
                each=move || publications.get()
                key=|p| p.id
                children=move |publication: Publication| {
                    let id = publication.id;
                    let del_api = row_api.clone();
                    let on_delete = Callback::new(move |_| {
                        let api = del_api.clone();
                        spawn_local(async move {
                            match api.delete_publication(id).await {
                                Ok(()) => {
                                    notifier.success("Publication removed");
                                    ctx.reload();
                                }
                                Err(e) => notifier.error(format!("Delete failed: {}", e)),
                            }
                        });
                    });

                    view! {
                        <div class="publication-row">
                            <span class="row-title">{publication.title.clone()}</span>
                            <span class="publication-venue">{publication.venue.clone()}</span>
                            <span class="publication-year">{publication.year}</span>
                            <span class="badge kind">{publication.kind.clone()}</span>
                            <span class="publication-citations">
                                {format!("{} citations", publication.citations)}
                            </span>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />

            {move || publications.get().is_empty().then(|| view! {
                <div class="empty-note">"No publications recorded"</div>
            })}

            {move || adding.get().then(|| view! {
                <Modal title="Add publication" on_close=move |_| set_adding.set(false)>
                    <PublicationForm on_done=move |_| set_adding.set(false) />
                </Modal>
            })}
        </div>
    }
}

#[component]
fn PublicationForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (title, set_title) = signal(String::new());
    let (venue, set_venue) = signal(String::new());
    let (year, set_year) = signal(current_year());
    let (citations, set_citations) = signal(0u32);
    let (kind, set_kind) = signal(String::from("journal"));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() {
            return;
        }
        let venue_value = venue.get();
        let kind_value = kind.get();

        let api = api.clone();
        spawn_local(async move {
            let draft = PublicationDraft {
                title: &title_value,
                venue: &venue_value,
                year: year.get_untracked(),
                citations: citations.get_untracked(),
                kind: &kind_value,
            };
            match api.create_publication(&draft).await {
                Ok(_) => {
                    notifier.success("Publication added");
                    ctx.reload();
                    on_done.run(());
                }
                Err(e) => notifier.error(format!("Adding publication failed: {}", e)),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Venue"
                prop:value=move || venue.get()
                on:input=move |ev| set_venue.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Year"
                prop:value=move || year.get().to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse() {
                        set_year.set(value);
                    }
                }
            />
            <input
                type="number"
                placeholder="Citations"
                prop:value=move || citations.get().to_string()
                on:input=move |ev| {
                    set_citations.set(event_target_value(&ev).parse().unwrap_or(0));
                }
            />
            <div class="type-selector-row">
                {PUBLICATION_KINDS.iter().map(|&value| {
                    let is_selected = move || kind.get() == value;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                            on:click=move |_| set_kind.set(value.to_string())
                        >
                            {value}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="form-actions">
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
