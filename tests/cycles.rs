//! Validates state history bookkeeping and cycle reporting

use blocklife::engine::cycle::{CycleReport, StateHistory};
use blocklife::spatial::Grid;

fn grid_from(rows: &[&[u8]]) -> Grid {
    let owned: Vec<Vec<u8>> = rows.iter().map(|row| row.to_vec()).collect();
    Grid::from_rows(&owned).unwrap_or_else(|error| unreachable!("test grid must be valid: {error}"))
}

/// 4x4 grid with a single live cell at the given flat position
fn single_cell(position: usize) -> Grid {
    let mut rows = vec![vec![0_u8; 4]; 4];
    if let Some(cell) = rows
        .get_mut(position / 4)
        .and_then(|row| row.get_mut(position % 4))
    {
        *cell = 1;
    }
    Grid::from_rows(&rows).unwrap_or_else(|error| unreachable!("test grid must be valid: {error}"))
}

#[test]
fn test_report_default_is_not_detected() {
    let report = CycleReport::default();
    assert!(!report.detected());
    assert_eq!(report.period, 0);
    assert_eq!(report.cycle_start, 0);
}

#[test]
fn test_repeat_of_oldest_state_reports_full_period() {
    let a = grid_from(&[&[1, 0], &[0, 0]]);
    let b = grid_from(&[&[0, 1], &[0, 0]]);
    let c = grid_from(&[&[0, 0], &[1, 0]]);

    let mut history = StateHistory::with_seed(&a);
    assert_eq!(history.observe(&b), CycleReport::default());
    assert_eq!(history.observe(&c), CycleReport::default());

    let report = history.observe(&a);
    assert!(report.detected());
    assert_eq!(report.period, 3);
    assert_eq!(report.cycle_start, 0);
}

#[test]
fn test_distinct_states_never_report_a_cycle() {
    let mut history = StateHistory::new();
    for position in 0..16 {
        let report = history.observe(&single_cell(position));
        assert!(!report.detected(), "false positive at state {position}");
    }
    assert_eq!(history.len(), 16);
}

#[test]
fn test_short_history_suppresses_immediate_repeat() {
    let state = grid_from(&[&[1, 1], &[0, 0]]);
    let mut history = StateHistory::with_seed(&state);

    // With only the seed recorded, even an exact repeat stays silent
    assert_eq!(history.observe(&state), CycleReport::default());

    // A second repeat has two snapshots behind it and reports period 1
    let report = history.observe(&state);
    assert!(report.detected());
    assert_eq!(report.period, 1);
    assert_eq!(report.cycle_start, 1);
}

#[test]
fn test_most_recent_match_wins() {
    let a = grid_from(&[&[1, 0], &[0, 0]]);
    let b = grid_from(&[&[0, 1], &[0, 0]]);

    let mut history = StateHistory::new();
    history.record(&a);
    history.record(&b);
    history.record(&a);

    // Both index 0 and index 2 hold `a`; the scan must find index 2
    let report = history.observe(&a);
    assert!(report.detected());
    assert_eq!(report.period, 1);
    assert_eq!(report.cycle_start, 2);
}

#[test]
fn test_observe_appends_after_scanning() {
    let a = grid_from(&[&[1, 0], &[0, 0]]);
    let b = grid_from(&[&[0, 1], &[0, 0]]);

    let mut history = StateHistory::new();
    assert!(history.is_empty());
    history.observe(&a);
    history.observe(&b);
    assert_eq!(history.len(), 2);

    // The state observed now must not match itself
    let c = grid_from(&[&[0, 0], &[1, 0]]);
    assert_eq!(history.observe(&c), CycleReport::default());
    assert_eq!(history.len(), 3);
}
