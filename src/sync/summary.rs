//! Summary Sync
//!
//! Fetches the aggregate snapshot and reconciles it into the summary view.

use super::SyncOutcome;
use crate::api::{self, FetchError, SummarySnapshot};

/// Destination for summary snapshots.
///
/// `apply` must write all three fields as one unit; partial card updates are
/// not a valid state. The production implementation is `GlobalState`, which
/// satisfies this with a single signal write.
pub trait SummaryView {
    fn apply(&self, snapshot: &SummarySnapshot);
}

/// Reconcile one fetch result into the view.
///
/// On failure the view is untouched and keeps its last-known values.
/// Overlapping refreshes are independent; whichever completes last is the
/// state shown, with no sequence reconciliation. Staleness self-corrects on
/// the next tick.
pub fn apply_summary<V: SummaryView>(
    view: &V,
    fetched: Result<SummarySnapshot, FetchError>,
) -> SyncOutcome {
    match fetched {
        Ok(snapshot) => {
            view.apply(&snapshot);
            SyncOutcome::Applied
        }
        Err(err) => SyncOutcome::Failed(err),
    }
}

/// Fetch the summary aggregate and write it into the view.
///
/// Never propagates an error; the caller receives a `SyncOutcome` to log.
pub async fn refresh_summary<V: SummaryView>(view: &V) -> SyncOutcome {
    apply_summary(view, api::fetch_summary().await)
}
