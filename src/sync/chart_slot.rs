//! Chart Slot
//!
//! Owns the lifetime of at most one rendered chart per mount point. Replacing
//! a chart always destroys the previous handle before the new one is created,
//! so two live handles never coexist for the same mount.

use super::SyncOutcome;
use crate::api::{CategoryPoint, FetchError, MonthlyPoint};

/// Bar series colors (income green, expense red).
pub const INCOME_COLOR: &str = "#10B981";
pub const EXPENSE_COLOR: &str = "#EF4444";

/// Visual style of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Grouped category bars with a zero-based value axis.
    Bar,
    /// Pie with a fixed categorical palette.
    Pie,
}

/// One named value series, in source order.
///
/// `color` is the fill for bar series; pie slices take their colors from the
/// renderer's palette, so pie series carry `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: Option<&'static str>,
    pub values: Vec<f64>,
}

/// Projected chart input: parallel label/value arrays preserving the order
/// the API produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Renders charts into a mount point and releases them again.
///
/// `create` returns `None` when the mount point is absent from the view;
/// that is a silent skip, not an error.
pub trait ChartBackend {
    type Handle;

    fn create(&mut self, kind: ChartKind, data: &ChartData) -> Option<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Exclusive owner of a mount point's chart handle.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    kind: ChartKind,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B, kind: ChartKind) -> Self {
        Self {
            backend,
            kind,
            handle: None,
        }
    }

    pub fn has_chart(&self) -> bool {
        self.handle.is_some()
    }

    /// Replace the current chart with one drawn from `data`.
    ///
    /// The old handle is taken out of the slot and fully destroyed before
    /// `create` runs. The ordering is load-bearing even under a runtime with
    /// real parallelism.
    pub fn apply(&mut self, data: &ChartData) {
        if let Some(old) = self.handle.take() {
            self.backend.destroy(old);
        }
        self.handle = self.backend.create(self.kind, data);
    }
}

/// Reconcile one fetched sequence into the slot.
///
/// Empty sequences leave the slot untouched (the documented empty-state
/// policy); failures leave a previously drawn chart displayed rather than
/// blanking it.
pub fn apply_fetched<B: ChartBackend>(
    slot: &mut ChartSlot<B>,
    fetched: Result<Option<ChartData>, FetchError>,
) -> SyncOutcome {
    match fetched {
        Ok(Some(data)) => {
            slot.apply(&data);
            SyncOutcome::Applied
        }
        Ok(None) => SyncOutcome::SkippedEmpty,
        Err(err) => SyncOutcome::Failed(err),
    }
}

/// Project monthly points into income/expense bar series. `None` when there
/// is nothing to draw.
pub fn monthly_chart_data(points: &[MonthlyPoint]) -> Option<ChartData> {
    if points.is_empty() {
        return None;
    }
    Some(ChartData {
        labels: points.iter().map(|p| p.month.clone()).collect(),
        series: vec![
            ChartSeries {
                name: "Income",
                color: Some(INCOME_COLOR),
                values: points.iter().map(|p| p.income).collect(),
            },
            ChartSeries {
                name: "Expense",
                color: Some(EXPENSE_COLOR),
                values: points.iter().map(|p| p.expense).collect(),
            },
        ],
    })
}

/// Project category points into a single pie series. `None` when empty.
pub fn category_chart_data(points: &[CategoryPoint]) -> Option<ChartData> {
    if points.is_empty() {
        return None;
    }
    Some(ChartData {
        labels: points.iter().map(|p| p.category.clone()).collect(),
        series: vec![ChartSeries {
            name: "Amount",
            color: None,
            values: points.iter().map(|p| p.amount).collect(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct BackendLog {
        events: Vec<String>,
        destroyed: usize,
        created: usize,
    }

    #[derive(Clone, Default)]
    struct MockBackend {
        log: Rc<RefCell<BackendLog>>,
        mount_absent: bool,
    }

    impl ChartBackend for MockBackend {
        type Handle = usize;

        fn create(&mut self, _kind: ChartKind, data: &ChartData) -> Option<usize> {
            if self.mount_absent {
                return None;
            }
            let mut log = self.log.borrow_mut();
            log.created += 1;
            let id = log.created;
            log.events.push(format!("create#{id} labels={:?}", data.labels));
            Some(id)
        }

        fn destroy(&mut self, handle: usize) {
            let mut log = self.log.borrow_mut();
            log.destroyed += 1;
            log.events.push(format!("destroy#{handle}"));
        }
    }

    fn data(labels: &[&str], values: &[f64]) -> ChartData {
        ChartData {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            series: vec![ChartSeries {
                name: "Amount",
                color: None,
                values: values.to_vec(),
            }],
        }
    }

    #[test]
    fn test_at_most_one_handle_after_repeated_refreshes() {
        let backend = MockBackend::default();
        let log = Rc::clone(&backend.log);
        let mut slot = ChartSlot::new(backend, ChartKind::Pie);

        let n = 5;
        for _ in 0..n {
            slot.apply(&data(&["Food"], &[1200.0]));
        }

        assert!(slot.has_chart());
        assert_eq!(log.borrow().created, n);
        assert_eq!(log.borrow().destroyed, n - 1);
    }

    #[test]
    fn test_destroy_fully_precedes_create() {
        let backend = MockBackend::default();
        let log = Rc::clone(&backend.log);
        let mut slot = ChartSlot::new(backend, ChartKind::Bar);

        slot.apply(&data(&["Jan"], &[1.0]));
        slot.apply(&data(&["Feb"], &[2.0]));

        let events = log.borrow().events.clone();
        assert_eq!(events.len(), 3);
        assert!(events[0].starts_with("create#1"));
        assert_eq!(events[1], "destroy#1");
        assert!(events[2].starts_with("create#2"));
    }

    #[test]
    fn test_empty_sequence_leaves_slot_untouched() {
        let backend = MockBackend::default();
        let log = Rc::clone(&backend.log);
        let mut slot = ChartSlot::new(backend, ChartKind::Bar);

        let outcome = apply_fetched(&mut slot, Ok(monthly_chart_data(&[])));
        assert_eq!(outcome, SyncOutcome::SkippedEmpty);
        assert!(!slot.has_chart());
        assert_eq!(log.borrow().created, 0);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_chart() {
        let backend = MockBackend::default();
        let log = Rc::clone(&backend.log);
        let mut slot = ChartSlot::new(backend, ChartKind::Pie);

        slot.apply(&data(&["Rent"], &[8000.0]));
        let outcome = apply_fetched(
            &mut slot,
            Err(FetchError::Malformed("not json".to_string())),
        );

        assert!(matches!(outcome, SyncOutcome::Failed(_)));
        assert!(slot.has_chart());
        assert_eq!(log.borrow().destroyed, 0);
    }

    #[test]
    fn test_absent_mount_is_silent_skip() {
        let backend = MockBackend {
            mount_absent: true,
            ..MockBackend::default()
        };
        let mut slot = ChartSlot::new(backend, ChartKind::Pie);

        slot.apply(&data(&["Food"], &[1200.0]));
        assert!(!slot.has_chart());
    }

    #[test]
    fn test_monthly_projection_preserves_length_and_order() {
        let points = vec![
            MonthlyPoint {
                month: "2024-01".to_string(),
                income: 50000.0,
                expense: 32000.0,
            },
            MonthlyPoint {
                month: "2024-02".to_string(),
                income: 41000.0,
                expense: 30000.0,
            },
        ];

        let data = monthly_chart_data(&points).unwrap();
        assert_eq!(data.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].name, "Income");
        assert_eq!(data.series[0].values, vec![50000.0, 41000.0]);
        assert_eq!(data.series[1].name, "Expense");
        assert_eq!(data.series[1].values, vec![32000.0, 30000.0]);
    }

    #[test]
    fn test_category_projection_preserves_order() {
        let points = vec![
            CategoryPoint {
                category: "Food".to_string(),
                amount: 1200.0,
            },
            CategoryPoint {
                category: "Rent".to_string(),
                amount: 8000.0,
            },
        ];

        let data = category_chart_data(&points).unwrap();
        assert_eq!(data.labels, vec!["Food", "Rent"]);
        assert_eq!(data.series[0].values, vec![1200.0, 8000.0]);
    }

    #[test]
    fn test_series_colors_only_on_bar_projection() {
        let monthly = monthly_chart_data(&[MonthlyPoint {
            month: "2024-01".to_string(),
            income: 50000.0,
            expense: 32000.0,
        }])
        .unwrap();
        assert_eq!(monthly.series[0].color, Some(INCOME_COLOR));
        assert_eq!(monthly.series[1].color, Some(EXPENSE_COLOR));

        // Pie slice colors come from the renderer's palette, not the series.
        let category = category_chart_data(&[CategoryPoint {
            category: "Food".to_string(),
            amount: 1200.0,
        }])
        .unwrap();
        assert_eq!(category.series[0].color, None);
    }
}
