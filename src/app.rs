//! App Root Component
//!
//! Root component with global providers, page chrome, and the anchor
//! smooth-scroll wiring.

use leptos::*;

use crate::components::{Nav, NotificationArea};
use crate::events::{self, EventSubscription};
use crate::format::format_date;
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Attach smooth-scroll interception once the tree is in the DOM; the
    // subscriptions are held for the page lifetime.
    let anchor_subscriptions = store_value::<Vec<EventSubscription>>(Vec::new());
    create_effect(move |_| {
        anchor_subscriptions.set_value(events::intercept_anchor_clicks());
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            // Footer with refresh status
            <Footer />

            // Notifications
            <NotificationArea />
        </div>
    }
}

/// Footer component showing refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_loading = state.clone();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        state.last_refresh.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!(
                                "Last refresh: {} {}",
                                format_date(&dt.format("%Y-%m-%d").to_string()),
                                dt.format("%H:%M:%S")
                            ))
                            .unwrap_or_else(|| "Not refreshed yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state_for_loading.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
