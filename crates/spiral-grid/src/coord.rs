//! Grid cell coordinates.
//!
//! Rows and columns are 1-indexed: `(1, 1)` is the top-left cell, where
//! every spiral starts. A grid of `rows x columns` cells therefore accepts
//! `1..=rows` and `1..=columns`.

use std::fmt;

/// A cell position in a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Row, counted from the top starting at 1
    pub row: u32,
    /// Column, counted from the left starting at 1
    pub column: u32,
}

impl GridCoord {
    /// The top-left cell, first in every traversal.
    pub const TOP_LEFT: Self = Self { row: 1, column: 1 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Whether the cell lies inside a `rows x columns` grid.
    #[inline]
    pub const fn is_within(&self, rows: u32, columns: u32) -> bool {
        self.row >= 1 && self.row <= rows && self.column >= 1 && self.column <= columns
    }

    /// Ring containing this cell in a `rows x columns` grid.
    ///
    /// The ring is the 1-indexed distance to the nearest border, so the
    /// outermost frame is ring 1. The cell must lie inside the grid.
    #[inline]
    pub fn ring_in(&self, rows: u32, columns: u32) -> u32 {
        debug_assert!(self.is_within(rows, columns));

        self.row
            .min(self.column)
            .min(rows - self.row + 1)
            .min(columns - self.column + 1)
    }

    /// Zero-based row-major offset of the cell in a grid `columns` wide.
    #[inline]
    pub fn row_major_offset(&self, columns: u32) -> usize {
        (self.row as usize - 1) * columns as usize + (self.column as usize - 1)
    }
}

impl From<(u32, u32)> for GridCoord {
    fn from((row, column): (u32, u32)) -> Self {
        Self { row, column }
    }
}

impl From<GridCoord> for (u32, u32) {
    fn from(value: GridCoord) -> Self {
        (value.row, value.column)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
