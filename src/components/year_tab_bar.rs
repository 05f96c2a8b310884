//! Year Tab Bar Component
//!
//! Tab bar for switching the fiscal year a panel is scoped to.

use leptos::prelude::*;

/// Years offered around the current one: two back, one ahead.
pub fn year_window(current: u16) -> Vec<u16> {
    (current - 2..=current + 1).collect()
}

/// The browser's current calendar year.
pub fn current_year() -> u16 {
    js_sys::Date::new_0().get_full_year() as u16
}

#[component]
pub fn YearTabBar(year: ReadSignal<u16>, set_year: WriteSignal<u16>) -> impl IntoView {
    let years = year_window(current_year());

    view! {
        <div class="year-tab-bar">
            {years
                .into_iter()
                .map(|y| {
                    let is_active = move || year.get() == y;
                    let tab_class = move || {
                        if is_active() { "year-tab active" } else { "year-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_year.set(y)>
                            {y.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_spans_two_back_one_ahead() {
        assert_eq!(year_window(2026), vec![2024, 2025, 2026, 2027]);
    }
}
