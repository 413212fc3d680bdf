//! Finance Tracker Dashboard
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary cards refreshed on a 30-second cadence
//! - Monthly income/expense bar chart and category pie chart
//! - Transient notifications with manual dismiss and auto-hide
//! - Client-side CSV export of transactions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It consumes the finance tracker REST API over HTTP; the API
//! itself is an external collaborator.

use leptos::*;

mod api;
mod app;
mod components;
mod events;
mod export;
mod format;
mod pages;
mod state;
mod sync;
mod timer;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
