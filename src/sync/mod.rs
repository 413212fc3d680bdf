//! Data Refresh & View Synchronization
//!
//! The fetch-reconcile-render core of the dashboard: summary card sync,
//! chart handle lifecycle, and the periodic refresh scheduler.

pub mod chart_slot;
pub mod refresh;
pub mod summary;

use crate::api::FetchError;

/// Result of one fetch-render cycle at a component boundary.
///
/// Failures are values, never panics: callers decide at one place whether to
/// log and move on. The next scheduled tick (or page load, for charts) is the
/// implicit retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Fresh data was written into the view.
    Applied,
    /// The source returned no rows; the view was intentionally left alone.
    SkippedEmpty,
    /// Fetch or decode failed; the view keeps its last-known values.
    Failed(FetchError),
}

/// Report a sync outcome to the console sink. The single composition point
/// for the catch-and-log policy.
pub fn log_outcome(operation: &str, outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Applied => {}
        SyncOutcome::SkippedEmpty => {
            web_sys::console::log_1(&format!("{operation}: no data to render").into());
        }
        SyncOutcome::Failed(err) => {
            web_sys::console::error_1(&format!("{operation} refresh failed: {err}").into());
        }
    }
}
