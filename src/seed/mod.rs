//! Initial grid seeding strategies
//!
//! The update engine accepts any well-formed grid; three strategies are
//! provided: stamped named shapes, uniform random fills, and a randomly
//! filled central region.

/// Named pattern shapes and placement
pub mod patterns;
/// Random fill strategies with reproducible generators
pub mod random;

use crate::io::error::Result;
use crate::spatial::Grid;

/// Strategy producing the initial grid configuration for a run
pub trait Seeder {
    /// Build a seeded grid of the requested dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are rejected or the strategy's
    /// placement does not fit the grid.
    fn seed(&self, height: usize, width: usize) -> Result<Grid>;
}

pub use patterns::{Pattern, PatternSeeder};
pub use random::{CentralAreaSeeder, RandomFillSeeder};
