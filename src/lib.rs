//! Margolus block cellular automaton with optional toroidal wrap-around and cycle detection
//!
//! The simulator partitions a binary grid into non-overlapping 2x2 blocks,
//! alternates the partition offset each generation, and watches the state
//! sequence for exact recurrences to report cycle periods.

#![forbid(unsafe_code)]

/// Core update engine: block rule, generation stepper, cycle detection
pub mod engine;
/// Input/output operations, CLI and error handling
pub mod io;
/// Initial grid seeding strategies
pub mod seed;
/// Grid data structure and validation
pub mod spatial;

pub use io::error::{Result, SimulationError};
