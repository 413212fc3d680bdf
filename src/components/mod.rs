//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod nav;
pub mod notification;
pub mod summary_cards;

pub use nav::Nav;
pub use notification::NotificationArea;
pub use summary_cards::SummaryCards;
