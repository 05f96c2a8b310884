//! Fund Budget Panel
//!
//! Per-year budgets grouped under their funds. Funds come from the shared
//! store; budgets are fetched per selected year. Entry point for the
//! year-copy wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, BudgetDraft};
use crate::components::year_tab_bar::{current_year, YearTabBar};
use crate::components::{DeleteConfirmButton, Modal, YearCopyWizard};
use crate::context::use_app_context;
use crate::hierarchy::group_budgets;
use crate::models::{format_amount, Fund, FundBudget};
use crate::notify::use_notifier;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FundBudgetPanel() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_app_store();

    let (year, set_year) = signal(current_year());
    let (budgets, set_budgets) = signal(Vec::<FundBudget>::new());
    let (loading, set_loading) = signal(false);
    let (copying, set_copying) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let selected_year = year.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_budgets(selected_year).await {
                    Ok(rows) => set_budgets.set(rows),
                    Err(e) => notifier.error(format!("Loading budgets failed: {}", e)),
                }
                set_loading.set(false);
            });
        });
    }

    let grouped = move || group_budgets(&store.funds().get(), &budgets.get());

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Fund Budgets"</h2>
                <button class="copy-year-btn" on:click=move |_| set_copying.set(true)>
                    "Copy from another year"
                </button>
            </div>

            <YearTabBar year=year set_year=set_year />

            <Show when=move || loading.get()>
                <div class="loading-note">"Loading..."</div>
            </Show>

            <For
                each=grouped
                key=|(fund, budgets)| {
                    (
                        fund.id,
                        budgets.iter().map(|b| (b.id, b.amount)).collect::<Vec<_>>(),
                    )
                }
                children=move |(fund, fund_budgets): (Fund, Vec<FundBudget>)| {
                    let fund_id = fund.id;
                    let api = row_api.clone();
                    view! {
                        <div class="fund-group">
                            <div class="fund-group-header">{fund.name.clone()}</div>
                            {if fund_budgets.is_empty() {
                                view! {
                                    <NewBudgetRow fund_id=fund_id year=year api=api.clone() />
                                }
                                .into_any()
                            } else {
                                fund_budgets
                                    .into_iter()
                                    .map(|budget| {
                                        view! { <BudgetRow budget=budget api=api.clone() /> }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    }
                }
            />

            {move || store.funds().get().is_empty().then(|| view! {
                <div class="empty-note">"No funds are configured"</div>
            })}

            {move || copying.get().then(|| view! {
                <Modal title="Copy year setup" on_close=move |_| set_copying.set(false)>
                    <YearCopyWizard
                        target_year=year.get_untracked()
                        on_done=move |_| set_copying.set(false)
                    />
                </Modal>
            })}
        </div>
    }
}

/// Existing budget: inline amount editing and deletion.
#[component]
fn BudgetRow(budget: FundBudget, api: crate::api::Api) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id = budget.id;
    let (amount, set_amount) = signal(budget.amount);

    let save_api = api.clone();
    let on_amount_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value: i64 = input.value().parse().unwrap_or(0);
        set_amount.set(value);

        let api = save_api.clone();
        spawn_local(async move {
            match api.update_budget_amount(id, value).await {
                Ok(_) => {
                    notifier.success("Budget updated");
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Updating budget failed: {}", e)),
            }
        });
    };

    let del_api = api.clone();
    let on_delete = Callback::new(move |_| {
        let api = del_api.clone();
        spawn_local(async move {
            match api.delete_budget(id).await {
                Ok(()) => {
                    notifier.success("Budget deleted");
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Delete failed: {}", e)),
            }
        });
    });

    view! {
        <div class="budget-row">
            <input
                type="number"
                class="amount-input"
                prop:value=move || amount.get().to_string()
                on:change=on_amount_change
            />
            <span class="amount-display">{move || format_amount(amount.get())}</span>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </div>
    }
}

/// Fund without a budget this year: offer to create one.
#[component]
fn NewBudgetRow(fund_id: u32, year: ReadSignal<u16>, api: crate::api::Api) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (amount, set_amount) = signal(0i64);

    let on_create = move |_| {
        let value = amount.get();
        if value <= 0 {
            notifier.warn("Enter a positive amount");
            return;
        }
        let api = api.clone();
        let draft = BudgetDraft {
            fund_id,
            year: year.get_untracked(),
            amount: value,
        };
        spawn_local(async move {
            match api.create_budget(&draft).await {
                Ok(_) => {
                    notifier.success("Budget created");
                    ctx.reload();
                }
                Err(e) => notifier.error(format!("Creating budget failed: {}", e)),
            }
        });
    };

    view! {
        <div class="budget-row new">
            <input
                type="number"
                class="amount-input"
                placeholder="No budget yet"
                prop:value=move || amount.get().to_string()
                on:input=move |ev| {
                    set_amount.set(event_target_value(&ev).parse().unwrap_or(0));
                }
            />
            <button class="add-btn" on:click=on_create>"Add budget"</button>
        </div>
    }
}
