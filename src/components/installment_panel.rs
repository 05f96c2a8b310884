//! Installment Panel
//!
//! Per-year installment schedule: the windows during which funding requests
//! can be submitted. Dates are edited inline; sequence numbers are fixed at
//! creation.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, InstallmentPeriodDraft};
use crate::components::year_tab_bar::{current_year, YearTabBar};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::InstallmentPeriod;
use crate::notify::use_notifier;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[component]
pub fn InstallmentPanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (year, set_year) = signal(current_year());
    let (periods, set_periods) = signal(Vec::<InstallmentPeriod>::new());
    let (loading, set_loading) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let selected_year = year.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_installment_periods(selected_year).await {
                    Ok(rows) => set_periods.set(rows),
                    Err(e) => notifier.error(format!("Loading installment periods failed: {}", e)),
                }
                set_loading.set(false);
            });
        });
    }

    // Next free sequence number for the add form
    let next_seq = move || {
        periods
            .get()
            .iter()
            .map(|p| p.seq)
            .max()
            .map(|s| s + 1)
            .unwrap_or(1)
    };

    let add_api = api.clone();
    let (new_opens, set_new_opens) = signal(String::new());
    let (new_closes, set_new_closes) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(opens_on), Some(closes_on)) =
            (parse_date(&new_opens.get()), parse_date(&new_closes.get()))
        else {
            notifier.warn("Both dates are required");
            return;
        };
        if closes_on < opens_on {
            notifier.warn("The period cannot close before it opens");
            return;
        }
        let draft = InstallmentPeriodDraft {
            year: year.get_untracked(),
            seq: next_seq(),
            opens_on,
            closes_on,
        };
        let api = add_api.clone();
        spawn_local(async move {
            match api.create_installment_period(&draft).await {
                Ok(_) => {
                    notifier.success("Installment period added");
                    set_new_opens.set(String::new());
                    set_new_closes.set(String::new());
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Creating period failed: {}", e)),
            }
        });
    };

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Installment Periods"</h2>
            </div>

            <YearTabBar year=year set_year=set_year />

            <form class="period-add-form" on:submit=on_add>
                <input
                    type="date"
                    prop:value=move || new_opens.get()
                    on:input=move |ev| set_new_opens.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || new_closes.get()
                    on:input=move |ev| set_new_closes.set(event_target_value(&ev))
                />
                <button type="submit">"Add period"</button>
            </form>

            <Show when=move || loading.get()>
                <div class="loading-note">"Loading..."</div>
            </Show>

            <For
                each=move || periods.get()
                key=|p| (p.id, p.opens_on, p.closes_on)
                children=move |period: InstallmentPeriod| {
                    view! { <PeriodRow period=period api=row_api.clone() /> }
                }
            />

            {move || (!loading.get() && periods.get().is_empty()).then(|| view! {
                <div class="empty-note">"No periods scheduled for this year"</div>
            })}
        </div>
    }
}

/// One schedule row with inline date editing.
#[component]
fn PeriodRow(period: InstallmentPeriod, api: crate::api::Api) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id = period.id;
    let year = period.year;
    let seq = period.seq;
    let opens_on = period.opens_on;
    let closes_on = period.closes_on;

    let save_api = api.clone();
    let save_dates = move |opens_on: NaiveDate, closes_on: NaiveDate| {
        if closes_on < opens_on {
            notifier.warn("The period cannot close before it opens");
            return;
        }
        let api = save_api.clone();
        let draft = InstallmentPeriodDraft {
            year,
            seq,
            opens_on,
            closes_on,
        };
        spawn_local(async move {
            match api.update_installment_period(id, &draft).await {
                Ok(_) => {
                    notifier.success("Period updated");
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Updating period failed: {}", e)),
            }
        });
    };
    let save_opens = save_dates.clone();
    let save_closes = save_dates.clone();

    let del_api = api.clone();
    let on_delete = Callback::new(move |_| {
        let api = del_api.clone();
        spawn_local(async move {
            match api.delete_installment_period(id).await {
                Ok(()) => {
                    notifier.success("Period deleted");
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Delete failed: {}", e)),
            }
        });
    });

    view! {
        <div class="period-row">
            <span class="period-seq">{format!("#{}", seq)}</span>
            <input
                type="date"
                prop:value=opens_on.format("%Y-%m-%d").to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    if let Some(date) = parse_date(&input.value()) {
                        save_opens(date, closes_on);
                    }
                }
            />
            <input
                type="date"
                prop:value=closes_on.format("%Y-%m-%d").to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    if let Some(date) = parse_date(&input.value()) {
                        save_closes(opens_on, date);
                    }
                }
            />
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </div>
    }
}
