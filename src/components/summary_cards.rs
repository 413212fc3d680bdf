//! Summary Cards
//!
//! The three aggregate cards: income, expense, balance. All three read from
//! the same snapshot signal, so a refresh updates them as one unit.

use leptos::*;

use crate::format::format_currency;
use crate::state::global::GlobalState;

/// Summary card row
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let income = Signal::derive(move || state.summary.get().map(|s| s.total_income));
    let expense = Signal::derive(move || state.summary.get().map(|s| s.total_expense));
    let balance = Signal::derive(move || state.summary.get().map(|s| s.balance));

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <SummaryCard label="Total Income" accent="border-blue-500" value=income />
            <SummaryCard label="Total Expense" accent="border-red-500" value=expense />
            <SummaryCard label="Balance" accent="border-green-500" value=balance />
        </div>
    }
}

/// One aggregate card; renders a placeholder until the first snapshot lands
#[component]
fn SummaryCard(
    label: &'static str,
    accent: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gray-800 rounded-lg p-4 border-l-4 {} border border-gray-700",
            accent
        )>
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2 amount">
                {move || {
                    value.get()
                        .map(format_currency)
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>
        </div>
    }
}
