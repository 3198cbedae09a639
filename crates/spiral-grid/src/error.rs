//! Error types for spiral-grid.

use thiserror::Error;

/// Result type for spiral-grid operations.
pub type Result<T> = std::result::Result<T, SpiralError>;

/// Errors reported for invalid grid dimensions or out-of-range queries.
///
/// Broken internal invariants are never reported through this type; they
/// panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpiralError {
    /// A grid was requested with a zero dimension.
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    EmptyGrid { rows: u32, columns: u32 },

    /// A cell outside the grid was queried.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    CoordinateOutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },

    /// A traversal order outside `1..=cell_count` was queried.
    #[error("order {order} is outside the traversal range 1..={cell_count}")]
    OrderOutOfBounds { order: u64, cell_count: u64 },
}
