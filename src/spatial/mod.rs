//! Spatial data structures for the simulation grid

/// Binary grid storage and validation
pub mod grid;

pub use grid::Grid;
