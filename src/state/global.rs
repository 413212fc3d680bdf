//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the notification
//! model the notification area renders from.

use leptos::*;

use crate::api::SummarySnapshot;
use crate::sync::summary::SummaryView;
use crate::timer::{BrowserSchedule, Schedule};

/// How long a notification stays visible without a manual dismiss.
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 5_000;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✕",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            Severity::Info => "bg-blue-600",
            Severity::Success => "bg-green-600",
            Severity::Warning => "bg-yellow-600",
            Severity::Error => "bg-red-600",
        }
    }
}

/// One transient message. Hidden is a terminal state: a node is hidden at
/// most once, by whichever of dismiss or auto-hide gets there first, and
/// stays in the list afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub hidden: bool,
}

/// Insert a new notification at the front of the list (newest first).
/// No stacking limit is enforced.
pub fn push_notification(
    list: &mut Vec<Notification>,
    id: u64,
    message: String,
    severity: Severity,
) {
    list.insert(
        0,
        Notification {
            id,
            message,
            severity,
            hidden: false,
        },
    );
}

/// Hide the notification with `id`. Returns `true` only on the call that
/// performed the transition; hiding an already-hidden node is a safe no-op.
pub fn hide_notification(list: &mut [Notification], id: u64) -> bool {
    match list.iter_mut().find(|n| n.id == id) {
        Some(notification) if !notification.hidden => {
            notification.hidden = true;
            true
        }
        _ => false,
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest summary aggregate, applied as one unit across all three cards
    pub summary: RwSignal<Option<SummarySnapshot>>,
    /// Notifications, newest first; hidden entries are kept but not rendered
    pub notifications: RwSignal<Vec<Notification>>,
    /// Monotonic notification id source
    next_notification_id: RwSignal<u64>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Timestamp of the last applied summary refresh
    pub last_refresh: RwSignal<Option<i64>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        summary: create_rw_signal(None),
        notifications: create_rw_signal(Vec::new()),
        next_notification_id: create_rw_signal(0),
        loading: create_rw_signal(false),
        last_refresh: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification that auto-hides after [`NOTIFICATION_AUTO_HIDE_MS`].
    ///
    /// The auto-hide timer and the dismiss button both funnel into
    /// `hide_notification`, so whichever fires second is a no-op.
    pub fn notify(&self, message: &str, severity: Severity) {
        let id = self.next_notification_id.get_untracked();
        self.next_notification_id.set(id + 1);

        let message = message.to_string();
        self.notifications
            .update(|list| push_notification(list, id, message, severity));

        let notifications = self.notifications;
        BrowserSchedule
            .once(
                NOTIFICATION_AUTO_HIDE_MS,
                Box::new(move || {
                    notifications.update(|list| {
                        let _ = hide_notification(list, id);
                    });
                }),
            )
            .forget();
    }

    /// Manually dismiss a notification.
    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|list| {
            let _ = hide_notification(list, id);
        });
    }
}

impl SummaryView for GlobalState {
    fn apply(&self, snapshot: &SummarySnapshot) {
        self.summary.set(Some(snapshot.clone()));
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_inserts_newest_first() {
        let mut list = Vec::new();
        push_notification(&mut list, 0, "first".to_string(), Severity::Info);
        push_notification(&mut list, 1, "second".to_string(), Severity::Success);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "second");
        assert_eq!(list[1].message, "first");
    }

    #[test]
    fn test_dismiss_then_auto_hide_hides_exactly_once() {
        let mut list = Vec::new();
        push_notification(&mut list, 0, "Saved".to_string(), Severity::Success);

        // Manual dismiss wins the race.
        assert!(hide_notification(&mut list, 0));
        // The pending auto-hide fires afterwards: safe no-op, no double-hide.
        assert!(!hide_notification(&mut list, 0));

        assert_eq!(list.len(), 1);
        assert!(list[0].hidden);
    }

    #[test]
    fn test_hide_unknown_id_is_a_no_op() {
        let mut list = Vec::new();
        push_notification(&mut list, 0, "hello".to_string(), Severity::Warning);
        assert!(!hide_notification(&mut list, 42));
        assert!(!list[0].hidden);
    }

    #[test]
    fn test_severity_presentation_mapping() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Error.bg_class(), "bg-red-600");
        assert_eq!(Severity::Warning.bg_class(), "bg-yellow-600");
    }
}
