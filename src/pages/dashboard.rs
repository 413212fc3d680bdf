//! Dashboard Page
//!
//! The single dashboard view. On mount it activates the refresh scheduler,
//! draws each chart once, and kicks off the peripheral loaders.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::chart::{CanvasBackend, CATEGORY_CHART_MOUNT, MONTHLY_CHART_MOUNT};
use crate::components::SummaryCards;
use crate::export;
use crate::state::global::{GlobalState, Severity};
use crate::sync::chart_slot::{
    apply_fetched, category_chart_data, monthly_chart_data, ChartKind, ChartSlot,
};
use crate::sync::log_outcome;
use crate::sync::refresh::RefreshScheduler;
use crate::sync::summary::refresh_summary;
use crate::timer::BrowserSchedule;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let scheduler = store_value(RefreshScheduler::new(BrowserSchedule));
    let monthly_slot = store_value(ChartSlot::new(
        CanvasBackend::new(MONTHLY_CHART_MOUNT),
        ChartKind::Bar,
    ));
    let category_slot = store_value(ChartSlot::new(
        CanvasBackend::new(CATEGORY_CHART_MOUNT),
        ChartKind::Pie,
    ));

    // Bootstrap wiring, after the page content is in the DOM.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();

        let tick_state = state.clone();
        let on_tick = move || {
            let state = tick_state.clone();
            spawn_local(async move {
                let outcome = refresh_summary(&state).await;
                log_outcome("summary", &outcome);
            });
        };

        let activated = scheduler
            .try_update_value(|s| s.start(on_tick))
            .unwrap_or(false);
        if !activated {
            return;
        }

        // Charts render once per page load; they are not on the periodic
        // cadence the summary is.
        state.loading.set(true);
        let chart_state = state.clone();
        spawn_local(async move {
            let fetched = api::fetch_monthly_summary()
                .await
                .map(|points| monthly_chart_data(&points));
            if let Some(outcome) =
                monthly_slot.try_update_value(|slot| apply_fetched(slot, fetched))
            {
                log_outcome("monthly chart", &outcome);
            }

            let fetched = api::fetch_category_distribution()
                .await
                .map(|points| category_chart_data(&points));
            if let Some(outcome) =
                category_slot.try_update_value(|slot| apply_fetched(slot, fetched))
            {
                log_outcome("category chart", &outcome);
            }

            chart_state.loading.set(false);
        });

        // Peripheral loaders: fetched and logged only.
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(rows) => web_sys::console::log_1(
                    &format!("loaded {} transactions", rows.len()).into(),
                ),
                Err(err) => web_sys::console::error_1(
                    &format!("transactions load failed: {err}").into(),
                ),
            }
            match api::fetch_expenses_by_category().await {
                Ok(rows) => web_sys::console::log_1(
                    &format!("loaded {} expense groups", rows.len()).into(),
                ),
                Err(err) => {
                    web_sys::console::error_1(&format!("expenses load failed: {err}").into())
                }
            }
        });
    });

    let export_state = state;
    let on_export = move |_| {
        let state = export_state.clone();
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(rows) => {
                    let records: Vec<_> = rows
                        .into_iter()
                        .filter_map(|value| match value {
                            serde_json::Value::Object(map) => Some(map),
                            _ => None,
                        })
                        .collect();
                    if export::export_to_csv(&records, "finance_tracker.csv") {
                        state.notify("Transactions exported", Severity::Success);
                    } else {
                        state.notify("No transactions to export", Severity::Warning);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("transactions export failed: {err}").into(),
                    );
                    state.notify("Could not load transactions", Severity::Error);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your finances at a glance"</p>
                </div>
                <button
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                    on:click=on_export
                >
                    "Export CSV"
                </button>
            </div>

            // Summary cards
            <section id="summary" class="summary-cards">
                <SummaryCards />
            </section>

            // Charts
            <section id="charts" class="space-y-8">
                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Monthly Overview"</h2>
                    <canvas
                        id=MONTHLY_CHART_MOUNT
                        width="800"
                        height="400"
                        class="w-full rounded-lg"
                    />
                </div>
                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Spending by Category"</h2>
                    <canvas
                        id=CATEGORY_CHART_MOUNT
                        width="800"
                        height="400"
                        class="w-full rounded-lg"
                    />
                </div>
            </section>
        </div>
    }
}
