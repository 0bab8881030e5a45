//! Cycle detection over the recorded state history
//!
//! Snapshots are stored as packed bit vectors with a 64-bit hash used as a
//! prefilter. Equality is always confirmed bit by bit, so a hash collision
//! can never produce a false period.

use crate::spatial::Grid;
use bitvec::vec::BitVec;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Result of observing one state against the history
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Generations between the state and its previous occurrence (0 = none)
    pub period: usize,
    /// History index where the detected cycle starts
    pub cycle_start: usize,
}

impl CycleReport {
    /// Whether a recurrence was found
    pub const fn detected(self) -> bool {
        self.period > 0
    }
}

/// Packed snapshot of one grid state
#[derive(Debug, Clone)]
struct Snapshot {
    hash: u64,
    bits: BitVec,
}

impl Snapshot {
    fn capture(grid: &Grid) -> Self {
        let bits = grid.pack_bits();
        let mut hasher = DefaultHasher::new();
        bits.hash(&mut hasher);
        Self {
            hash: hasher.finish(),
            bits,
        }
    }
}

/// Append-only sequence of prior grid states
///
/// Grows by one snapshot per observed generation and is discarded with the
/// run; snapshots are immutable once appended.
#[derive(Debug, Clone, Default)]
pub struct StateHistory {
    snapshots: Vec<Snapshot>,
}

impl StateHistory {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Create a history primed with the seed state
    pub fn with_seed(grid: &Grid) -> Self {
        let mut history = Self::new();
        history.record(grid);
        history
    }

    /// Number of recorded snapshots
    pub const fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshots have been recorded yet
    pub const fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Record a state without scanning for recurrences
    pub fn record(&mut self, grid: &Grid) {
        self.snapshots.push(Snapshot::capture(grid));
    }

    /// Compare a state against the history, then append it
    ///
    /// Scans newest to oldest and reports on the first exact match: the
    /// period is the number of generations elapsed since that snapshot and
    /// `cycle_start` is its history index. Histories holding fewer than two
    /// snapshots report no cycle. The state joins the history only after
    /// the scan, so it is never compared against itself.
    pub fn observe(&mut self, grid: &Grid) -> CycleReport {
        let current = Snapshot::capture(grid);
        let report = self.scan(&current);
        self.snapshots.push(current);
        report
    }

    fn scan(&self, current: &Snapshot) -> CycleReport {
        if self.snapshots.len() < 2 {
            return CycleReport::default();
        }
        for (index, past) in self.snapshots.iter().enumerate().rev() {
            // A matching hash still requires exact bit equality
            if past.hash == current.hash && past.bits == current.bits {
                return CycleReport {
                    period: self.snapshots.len() - index,
                    cycle_start: index,
                };
            }
        }
        CycleReport::default()
    }
}
