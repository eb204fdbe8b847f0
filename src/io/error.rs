//! Error types for grid construction, socket lookup and ordering operations

use crate::grid::id::GridId;
use std::fmt;

/// Main error type for all grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Argument supplied to a grid operation is absent or inconsistent
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Explanation of why the argument was rejected
        reason: String,
    },

    /// Socket identifier lies outside the grid bounds
    ///
    /// Rows and columns are 1-based, so the empty identifier (row 0,
    /// column 0) is always out of bounds.
    IdOutOfBounds {
        /// The identifier that was looked up
        id: GridId,
        /// Column count of the grid
        columns: u8,
        /// Row count of the grid
        rows: u8,
    },

    /// Start corner and scan direction do not name one of the eight policies
    InvalidOperation {
        /// Raw corner code that was supplied
        corner: u8,
        /// Raw direction code that was supplied
        direction: u8,
    },

    /// Background worker failed before producing a result
    Worker {
        /// Description of the failure reported by the runtime
        reason: String,
    },
}

impl GridError {
    /// Whether this error belongs to the invalid-argument class
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::IdOutOfBounds { .. }
        )
    }

    /// Whether this error belongs to the invalid-operation class
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { parameter, reason } => {
                write!(f, "Invalid argument '{parameter}': {reason}")
            }
            Self::IdOutOfBounds { id, columns, rows } => {
                write!(
                    f,
                    "Socket {id} is outside the grid ({columns} columns x {rows} rows)"
                )
            }
            Self::InvalidOperation { corner, direction } => {
                write!(
                    f,
                    "No processing policy for corner code {corner} with direction code {direction}"
                )
            }
            Self::Worker { reason } => {
                write!(f, "Background worker failed: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for GridError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Worker {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid argument error
pub fn invalid_argument(parameter: &'static str, reason: &impl ToString) -> GridError {
    GridError::InvalidArgument {
        parameter,
        reason: reason.to_string(),
    }
}

/// Create an invalid operation error from raw policy codes
pub const fn invalid_operation(corner: u8, direction: u8) -> GridError {
    GridError::InvalidOperation { corner, direction }
}
