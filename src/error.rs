//! Grid error types.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns were not strictly positive.
    #[error("invalid grid dimension: {rows}x{columns} (both must be greater than 0)")]
    InvalidDimension { rows: i32, columns: i32 },

    /// No random source was supplied to `randomize`.
    #[error("no random source supplied")]
    NullSource,
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
