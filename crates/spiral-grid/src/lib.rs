//! Spiral Grid
//!
//! Constant-time bijection between the visiting order of a clockwise,
//! inward spiral and the cells of a square or rectangular grid.
//!
//! # Traversal
//!
//! The spiral starts at the top-left cell `(1, 1)`, walks the outer ring
//! clockwise (top edge, right edge, bottom edge, left edge) and then each
//! inner ring the same way. For a 3x3 grid:
//!
//! ```text
//!   1  2  3
//!   8  9  4
//!   7  6  5
//! ```
//!
//! # Closed forms
//!
//! Neither direction simulates the walk. A cell's ring is its distance to
//! the nearest border, and the number of cells in the first `r` rings has a
//! closed form whose inverse is an integer square root. Both [`SquareSpiral`]
//! and [`RectangularSpiral`] answer [`SpiralTraversal::index`] and
//! [`SpiralTraversal::coordinates`] in O(1).
//!
//! ```
//! use spiral_grid::{GridCoord, RectangularSpiral, SpiralTraversal};
//!
//! let grid = RectangularSpiral::new(2, 3)?;
//! assert_eq!(grid.coordinates(5)?, GridCoord::new(2, 2));
//! assert_eq!(grid.index(2, 1)?, 6);
//! # Ok::<(), spiral_grid::SpiralError>(())
//! ```

mod coord;
mod error;
mod rectangular;
mod ring;
mod square;
mod traversal;
pub mod validate;

pub use coord::GridCoord;
pub use error::{Result, SpiralError};
pub use rectangular::RectangularSpiral;
pub use ring::{loop_count, RingPosition, Side};
pub use square::SquareSpiral;
pub use traversal::{Spiral, SpiralTraversal};

/// Traversal of a grid of either shape.
///
/// Square grids use the square formulas; anything else the rectangular ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grid {
    /// An `n x n` grid.
    Square(SquareSpiral),
    /// An `m x n` grid.
    Rectangular(RectangularSpiral),
}

impl Grid {
    /// Pick the traversal matching the grid's shape.
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        if rows == columns {
            SquareSpiral::new(rows).map(Self::Square)
        } else {
            RectangularSpiral::new(rows, columns).map(Self::Rectangular)
        }
    }

    /// Borrow the traversal behind this grid.
    pub fn as_traversal(&self) -> &dyn SpiralTraversal {
        match self {
            Self::Square(grid) => grid,
            Self::Rectangular(grid) => grid,
        }
    }
}

impl From<SquareSpiral> for Grid {
    fn from(value: SquareSpiral) -> Self {
        Self::Square(value)
    }
}

impl From<RectangularSpiral> for Grid {
    fn from(value: RectangularSpiral) -> Self {
        Self::Rectangular(value)
    }
}
