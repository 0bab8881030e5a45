//! Input/output: CLI, configuration, errors, progress, rendering

/// Command-line interface and run orchestration
pub mod cli;
/// Simulation constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Progress display for runs and analysis sweeps
pub mod progress;
/// Frame capture and image export
pub mod render;
