//! Run loop composing the stepper with cycle observation
//!
//! One loop serves every seeding variant: the simulation owns the grid,
//! the generation counter, the wrap flag, and the state history.

use crate::engine::cycle::{CycleReport, StateHistory};
use crate::engine::stepper::step;
use crate::spatial::Grid;

/// Outcome of a bounded run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Report from the final observation (period 0 when the cap expired)
    pub report: CycleReport,
    /// Value of the generation counter when the run stopped
    pub generations: u64,
}

/// Single-threaded simulation over one grid
///
/// The generation counter starts at 1 and its parity selects the partition
/// offset for each step; the wrap flag is fixed for the run.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    wrap_around: bool,
    history: StateHistory,
}

impl Simulation {
    /// Start a simulation at generation 1 with the history primed on the
    /// seeded state
    pub fn new(grid: Grid, wrap_around: bool) -> Self {
        let history = StateHistory::with_seed(&grid);
        Self {
            grid,
            generation: 1,
            wrap_around,
            history,
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current generation counter
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this run wraps at the boundary
    pub const fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    /// Number of states recorded so far, seed included
    pub const fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Advance one generation and observe the new state
    pub fn advance(&mut self) -> CycleReport {
        self.grid = step(&self.grid, self.generation, self.wrap_around);
        self.generation += 1;
        self.history.observe(&self.grid)
    }

    /// Advance until the first detected cycle or until `max_generations`
    /// steps have run, whichever comes first
    pub fn run_to_cycle(&mut self, max_generations: usize) -> RunOutcome {
        for _ in 0..max_generations {
            let report = self.advance();
            if report.detected() {
                return RunOutcome {
                    report,
                    generations: self.generation,
                };
            }
        }
        RunOutcome {
            report: CycleReport::default(),
            generations: self.generation,
        }
    }
}
