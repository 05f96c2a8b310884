//! Year Copy Wizard Component
//!
//! Two-step copy of one year's budgets and installment schedule into the
//! working year: preview what the target year is missing, then create the
//! entries one call at a time with a failure tally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiError, BudgetDraft, InstallmentPeriodDraft};
use crate::components::year_tab_bar::{current_year, year_window};
use crate::context::use_app_context;
use crate::models::format_amount;
use crate::notify::use_notifier;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::year_copy::{plan_year_copy, CopyPlan};

#[component]
pub fn YearCopyWizard(target_year: u16, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_app_store();

    let (source_year, set_source_year) = signal(target_year - 1);
    let (plan, set_plan) = signal::<Option<CopyPlan>>(None);
    let (busy, set_busy) = signal(false);

    let preview_api = api.clone();
    let on_preview = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let api = preview_api.clone();
        let source = source_year.get();
        spawn_local(async move {
            let result = async {
                let source_budgets = api.list_budgets(source).await?;
                let target_budgets = api.list_budgets(target_year).await?;
                let source_periods = api.list_installment_periods(source).await?;
                let target_periods = api.list_installment_periods(target_year).await?;
                Ok::<CopyPlan, ApiError>(plan_year_copy(
                    &source_budgets,
                    &target_budgets,
                    &source_periods,
                    &target_periods,
                    target_year,
                ))
            }
            .await;
            match result {
                Ok(new_plan) => set_plan.set(Some(new_plan)),
                Err(e) => notifier.error(format!("Loading year data failed: {}", e)),
            }
            set_busy.set(false);
        });
    };

    let apply_api = api.clone();
    let on_apply = move |_| {
        let Some(current_plan) = plan.get() else {
            return;
        };
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let api = apply_api.clone();
        spawn_local(async move {
            let total = current_plan.len();
            let mut failures = 0usize;
            for planned in &current_plan.budgets {
                let draft = BudgetDraft {
                    fund_id: planned.fund_id,
                    year: target_year,
                    amount: planned.amount,
                };
                if api.create_budget(&draft).await.is_err() {
                    failures += 1;
                }
            }
            for planned in &current_plan.periods {
                let draft = InstallmentPeriodDraft {
                    year: target_year,
                    seq: planned.seq,
                    opens_on: planned.opens_on,
                    closes_on: planned.closes_on,
                };
                if api.create_installment_period(&draft).await.is_err() {
                    failures += 1;
                }
            }
            if failures == 0 {
                notifier.success(format!("Copied {} entries into {}", total, target_year));
            } else {
                notifier.error(format!(
                    "Copied {} of {} entries ({} failed)",
                    total - failures,
                    total,
                    failures
                ));
            }
            ctx.reload();
            set_busy.set(false);
            on_done.run(());
        });
    };

    let fund_name = move |fund_id: u32| {
        store
            .funds()
            .get()
            .iter()
            .find(|f| f.id == fund_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("Fund #{}", fund_id))
    };

    view! {
        <div class="year-copy-wizard">
            {move || match plan.get() {
                None => view! {
                    <div class="wizard-step">
                        <p>{format!("Copy budgets and installment periods into {}.", target_year)}</p>
                        <label class="wizard-label">"Copy from"</label>
                        <div class="year-tab-bar">
                            {year_window(current_year())
                                .into_iter()
                                .filter(|&y| y != target_year)
                                .map(|y| {
                                    let is_active = move || source_year.get() == y;
                                    let tab_class = move || {
                                        if is_active() { "year-tab active" } else { "year-tab" }
                                    };
                                    view! {
                                        <button class=tab_class on:click=move |_| set_source_year.set(y)>
                                            {y.to_string()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="primary-btn"
                            disabled=move || busy.get()
                            on:click=on_preview.clone()
                        >
                            {move || if busy.get() { "Checking..." } else { "Preview" }}
                        </button>
                    </div>
                }
                .into_any(),
                Some(current_plan) => {
                    if current_plan.is_empty() {
                        view! {
                            <div class="wizard-step">
                                <p>{format!(
                                    "{} already has everything {} could contribute.",
                                    target_year,
                                    source_year.get()
                                )}</p>
                                <button class="primary-btn" on:click=move |_| on_done.run(())>
                                    "Close"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="wizard-step">
                                <p>{format!("{} entries will be created:", current_plan.len())}</p>
                                <ul class="copy-preview">
                                    {current_plan
                                        .budgets
                                        .iter()
                                        .map(|b| view! {
                                            <li>{format!(
                                                "Budget: {} at {}",
                                                fund_name(b.fund_id),
                                                format_amount(b.amount)
                                            )}</li>
                                        })
                                        .collect_view()}
                                    {current_plan
                                        .periods
                                        .iter()
                                        .map(|p| view! {
                                            <li>{format!(
                                                "Period #{}: {} to {}",
                                                p.seq, p.opens_on, p.closes_on
                                            )}</li>
                                        })
                                        .collect_view()}
                                </ul>
                                <div class="form-actions">
                                    <button on:click=move |_| set_plan.set(None)>"Back"</button>
                                    <button
                                        class="primary-btn"
                                        disabled=move || busy.get()
                                        on:click=on_apply.clone()
                                    >
                                        {move || if busy.get() { "Copying..." } else { "Apply" }}
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
