//! Error types for simulation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
#[derive(Debug)]
pub enum SimulationError {
    /// Grid dimensions fail the construction preconditions
    InvalidDimensions {
        /// Requested height
        height: usize,
        /// Requested width
        width: usize,
        /// Explanation of the failed precondition
        reason: &'static str,
    },

    /// Row length differs from the first row during grid construction
    RaggedRows {
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
        /// Index of the offending row
        row: usize,
    },

    /// Cell value outside {0,1}
    InvalidCellValue {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u8,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to export a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                height,
                width,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {height}x{width}: {reason}")
            }
            Self::RaggedRows {
                expected,
                found,
                row,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the grid is {expected} cells wide"
                )
            }
            Self::InvalidCellValue { row, col, value } => {
                write!(
                    f,
                    "Cell ({row}, {col}) holds {value}; cells must be 0 or 1"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for SimulationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_cell() {
        let err = SimulationError::InvalidCellValue {
            row: 3,
            col: 7,
            value: 9,
        };
        let message = err.to_string();
        assert!(message.contains("(3, 7)"));
        assert!(message.contains('9'));
    }

    #[test]
    fn test_invalid_parameter_helper_carries_context() {
        let err = invalid_parameter("percentage", &120, &"must be between 0 and 100");
        match err {
            SimulationError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "percentage");
                assert_eq!(value, "120");
            }
            _ => unreachable!("expected InvalidParameter"),
        }
    }
}
