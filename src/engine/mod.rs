//! Core update engine and cycle detection
//!
//! The engine is single-threaded and synchronous: each step reads the prior
//! generation in full, computes into a fresh buffer, and commits it whole.

/// Cycle detection over the recorded state history
pub mod cycle;
/// The 2x2 block transition rule
pub mod rule;
/// Run loop composing stepping with cycle observation
pub mod simulation;
/// Margolus partition scheduling and boundary policy
pub mod stepper;

pub use cycle::{CycleReport, StateHistory};
pub use rule::Block;
pub use simulation::{RunOutcome, Simulation};
pub use stepper::step;
