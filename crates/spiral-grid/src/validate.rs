//! Exhaustive cross-validation of spiral traversals.
//!
//! These checks drive a traversal through every order of its grid and
//! confirm the properties the closed-form arithmetic is supposed to hold:
//! round trips in both directions, full coverage without duplicates, rings
//! visited outside-in, rejection of out-of-range queries, and agreement
//! between the square and rectangular implementations.

use thiserror::Error;
use tracing::{debug, info};

use crate::{GridCoord, RectangularSpiral, SpiralError, SpiralTraversal, SquareSpiral};

/// A broken traversal property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Constructing or querying a grid failed.
    #[error(transparent)]
    Spiral(#[from] SpiralError),

    /// An order did not survive the trip through its coordinates.
    #[error("{rows}x{columns}: order {order} maps to {coord}, which maps back to {back}")]
    RoundTrip {
        rows: u32,
        columns: u32,
        order: u64,
        coord: GridCoord,
        back: u64,
    },

    /// Two orders landed on the same cell.
    #[error("{rows}x{columns}: orders {first} and {second} both map to {coord}")]
    Duplicate {
        rows: u32,
        columns: u32,
        coord: GridCoord,
        first: u64,
        second: u64,
    },

    /// An order mapped outside the grid.
    #[error("{rows}x{columns}: order {order} maps outside the grid to {coord}")]
    OutOfGrid {
        rows: u32,
        columns: u32,
        order: u64,
        coord: GridCoord,
    },

    /// The spiral stepped outward or skipped a ring.
    #[error("{rows}x{columns}: order {order} is in ring {ring} after ring {previous}")]
    RingOrder {
        rows: u32,
        columns: u32,
        order: u64,
        ring: u32,
        previous: u32,
    },

    /// An out-of-range query was answered instead of rejected.
    #[error("{rows}x{columns}: out-of-range query {query} was accepted")]
    AcceptedInvalid {
        rows: u32,
        columns: u32,
        query: String,
    },

    /// Square and rectangular traversals disagree on an order.
    #[error("{size}x{size}: order {order} is {square} as a square but {rectangular} as a rectangle")]
    ShapeMismatch {
        size: u32,
        order: u64,
        square: GridCoord,
        rectangular: GridCoord,
    },
}

/// Outcome of validating one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Rows of the validated grid
    pub rows: u32,
    /// Columns of the validated grid
    pub columns: u32,
    /// Orders driven through a full round trip
    pub cells_checked: u64,
    /// Rings visited
    pub rings: u32,
}

/// Outcome of a sweep over many grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepSummary {
    /// Largest side length swept
    pub max_size: u32,
    /// Traversals validated, square and rectangular counted separately
    pub grids_checked: u64,
    /// Orders driven through a full round trip across all grids
    pub cells_checked: u64,
}

/// Check bijectivity, coverage and ring order of one traversal.
pub fn check_bijection<T: SpiralTraversal + ?Sized>(
    traversal: &T,
) -> Result<ValidationReport, ValidationError> {
    let (rows, columns) = (traversal.rows(), traversal.columns());
    let cell_count = traversal.cell_count();
    let Ok(slots) = usize::try_from(cell_count) else {
        panic!("coverage map of {cell_count} cells exceeds the address space");
    };
    let mut visited_by = vec![0u64; slots];
    let mut previous_ring = 1;

    for order in 1..=traversal.cell_count() {
        let coord = traversal.coordinates(order)?;
        if !coord.is_within(rows, columns) {
            return Err(ValidationError::OutOfGrid {
                rows,
                columns,
                order,
                coord,
            });
        }

        let slot = &mut visited_by[coord.row_major_offset(columns)];
        if *slot != 0 {
            return Err(ValidationError::Duplicate {
                rows,
                columns,
                coord,
                first: *slot,
                second: order,
            });
        }
        *slot = order;

        let back = traversal.index_of(coord)?;
        if back != order {
            return Err(ValidationError::RoundTrip {
                rows,
                columns,
                order,
                coord,
                back,
            });
        }

        let ring = traversal.ring_of(coord)?;
        if ring != previous_ring && ring != previous_ring + 1 {
            return Err(ValidationError::RingOrder {
                rows,
                columns,
                order,
                ring,
                previous: previous_ring,
            });
        }
        previous_ring = ring;
    }

    Ok(ValidationReport {
        rows,
        columns,
        cells_checked: traversal.cell_count(),
        rings: previous_ring,
    })
}

/// Check that queries just outside the grid are rejected.
pub fn check_bounds<T: SpiralTraversal + ?Sized>(traversal: &T) -> Result<(), ValidationError> {
    let (rows, columns) = (traversal.rows(), traversal.columns());
    let accepted = |query: String| ValidationError::AcceptedInvalid {
        rows,
        columns,
        query,
    };

    for order in [0, traversal.cell_count() + 1] {
        if traversal.coordinates(order).is_ok() {
            return Err(accepted(format!("coordinates({order})")));
        }
    }

    // A side of u32::MAX has no representable cell past its edge
    let cells = [
        Some((0, 1)),
        Some((1, 0)),
        rows.checked_add(1).map(|row| (row, 1)),
        columns.checked_add(1).map(|column| (1, column)),
    ];
    for (row, column) in cells.into_iter().flatten() {
        if traversal.index(row, column).is_ok() {
            return Err(accepted(format!("index({row}, {column})")));
        }
    }

    Ok(())
}

/// Check that the square and rectangular traversals of an `size x size`
/// grid agree on every order.
pub fn check_shape_agreement(size: u32) -> Result<u64, ValidationError> {
    let square = SquareSpiral::new(size)?;
    let rectangular = RectangularSpiral::new(size, size)?;

    for order in 1..=square.cell_count() {
        let expected = square.coordinates(order)?;
        let actual = rectangular.coordinates(order)?;
        if expected != actual {
            return Err(ValidationError::ShapeMismatch {
                size,
                order,
                square: expected,
                rectangular: actual,
            });
        }
    }

    Ok(square.cell_count())
}

/// Validate every grid with `1 <= rows, columns <= max_size`.
///
/// Each rectangle gets the bijection and bounds checks; square sizes are
/// additionally checked with the square traversal and against each other.
pub fn sweep(max_size: u32) -> Result<SweepSummary, ValidationError> {
    let mut summary = SweepSummary {
        max_size,
        ..SweepSummary::default()
    };

    for rows in 1..=max_size {
        for columns in 1..=max_size {
            let grid = RectangularSpiral::new(rows, columns)?;
            let report = check_bijection(&grid)?;
            check_bounds(&grid)?;
            summary.grids_checked += 1;
            summary.cells_checked += report.cells_checked;

            debug!(rows, columns, rings = report.rings, "rectangular traversal verified");
        }

        let square = SquareSpiral::new(rows)?;
        let report = check_bijection(&square)?;
        check_bounds(&square)?;
        check_shape_agreement(rows)?;
        summary.grids_checked += 1;
        summary.cells_checked += report.cells_checked;

        debug!(size = rows, rings = report.rings, "square traversal verified");
    }

    info!(
        max_size,
        grids = summary.grids_checked,
        cells = summary.cells_checked,
        "spiral traversal sweep passed"
    );
    Ok(summary)
}
