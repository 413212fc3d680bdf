//! Notification Area
//!
//! Renders the transient notification stack, newest first. Hidden entries
//! stay in state but produce no nodes.

use leptos::*;

use crate::state::global::{GlobalState, Notification};

/// Notification container, fixed to the top-right corner
#[component]
pub fn NotificationArea() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80">
            {move || {
                state.notifications.get()
                    .into_iter()
                    .filter(|n| !n.hidden)
                    .map(|n| view! { <NotificationCard notification=n /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = notification.id;

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            notification.severity.bg_class()
        )>
            <span class="text-lg">{notification.severity.icon()}</span>
            <span class="flex-1 text-sm font-medium">{notification.message.clone()}</span>
            <button
                class="text-white/70 hover:text-white font-bold"
                on:click=move |_| state.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
