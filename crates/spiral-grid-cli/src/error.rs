//! Error types for the spiral-grid CLI.

use spiral_grid::validate::ValidationError;
use spiral_grid::SpiralError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while configuring or running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A setting or argument could not be parsed
    #[error("invalid {name} {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The first positional argument is not a known command
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    /// A command or flag is missing an operand
    #[error("missing {0}")]
    MissingArgument(&'static str),

    /// More positional arguments than the command takes
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    /// The square traversal was forced on a non-square grid
    #[error("square traversal needs equal sides, got {rows}x{columns}")]
    NotSquare { rows: u32, columns: u32 },

    /// The order matrix of the grid is too large to print
    #[error("{rows}x{columns} grid has {cells} cells, more than the {limit} that `show` prints")]
    MatrixTooLarge {
        rows: u32,
        columns: u32,
        cells: u64,
        limit: u64,
    },

    /// Grid construction or a query failed
    #[error(transparent)]
    Spiral(#[from] SpiralError),

    /// The validation sweep found a broken property
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// JSON output could not be produced
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
