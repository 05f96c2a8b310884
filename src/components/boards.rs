//! Public Boards
//!
//! Read-only views for visitors and members: published announcements and
//! the active fund-form download list, both in the server's display order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::use_app_context;
use crate::markdown::render_markdown;
use crate::models::{Announcement, FundForm};
use crate::notify::use_notifier;

#[component]
pub fn AnnouncementBoard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (announcements, set_announcements) = signal(Vec::<Announcement>::new());

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            spawn_local(async move {
                match api.list_announcements().await {
                    Ok(rows) => {
                        set_announcements.set(rows.into_iter().filter(|a| a.published).collect());
                    }
                    Err(e) => notifier.error(format!("Loading announcements failed: {}", e)),
                }
            });
        });
    }

    view! {
        <div class="board">
            <h2>"Announcements"</h2>
            <For
                each=move || announcements.get()
                key=|a| a.id
                children=move |announcement: Announcement| {
                    view! {
                        <article class="board-entry">
                            <h3>{announcement.title}</h3>
                            <div class="board-body" inner_html=render_markdown(&announcement.body)></div>
                        </article>
                    }
                }
            />
            {move || announcements.get().is_empty().then(|| view! {
                <div class="empty-note">"Nothing has been announced yet"</div>
            })}
        </div>
    }
}

#[component]
pub fn FundFormBoard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (forms, set_forms) = signal(Vec::<FundForm>::new());

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = api.clone();
            spawn_local(async move {
                match api.list_fund_forms().await {
                    Ok(rows) => set_forms.set(rows.into_iter().filter(|f| f.active).collect()),
                    Err(e) => notifier.error(format!("Loading fund forms failed: {}", e)),
                }
            });
        });
    }

    view! {
        <div class="board">
            <h2>"Fund Forms"</h2>
            <For
                each=move || forms.get()
                key=|f| f.id
                children=move |form: FundForm| {
                    view! {
                        <div class="board-row">
                            <a class="form-link" href=form.file_url.clone() download="">
                                {form.name}
                            </a>
                            <span class="form-description">{form.description}</span>
                        </div>
                    }
                }
            />
            {move || forms.get().is_empty().then(|| view! {
                <div class="empty-note">"No forms are available"</div>
            })}
        </div>
    }
}
