//! The spiral traversal contract shared by both grid shapes.

use crate::{GridCoord, Result, RingPosition, SpiralError};

/// Constant-time bijection between spiral order and grid coordinates.
///
/// Orders run from 1 (the top-left cell) to `cell_count()`; the spiral walks
/// clockwise and finishes each ring before moving inward.
pub trait SpiralTraversal {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn columns(&self) -> u32;

    /// Number of concentric rings.
    fn loop_count(&self) -> u32;

    /// Cells visited by the first `loops` rings.
    ///
    /// Any `loops` at or past `loop_count()` counts the whole grid.
    fn cells_through(&self, loops: u32) -> u64;

    /// Traversal order of the cell at (`row`, `column`).
    fn index(&self, row: u32, column: u32) -> Result<u64>;

    /// Ring, edge and edge offset of the cell visited at `order`.
    fn ring_position(&self, order: u64) -> Result<RingPosition>;

    /// Cell visited at `order`.
    fn coordinates(&self, order: u64) -> Result<GridCoord>;

    /// Total number of cells.
    fn cell_count(&self) -> u64 {
        u64::from(self.rows()) * u64::from(self.columns())
    }

    /// Number of cells in `ring`.
    fn cells_in_ring(&self, ring: u32) -> u64 {
        if ring == 0 || ring > self.loop_count() {
            return 0;
        }
        self.cells_through(ring) - self.cells_through(ring - 1)
    }

    /// Traversal order of `coord`.
    fn index_of(&self, coord: GridCoord) -> Result<u64> {
        self.index(coord.row, coord.column)
    }

    /// Ring containing `coord`.
    fn ring_of(&self, coord: GridCoord) -> Result<u32> {
        self.check_coord(coord)?;
        Ok(coord.ring_in(self.rows(), self.columns()))
    }

    /// Reject cells outside the grid.
    fn check_coord(&self, coord: GridCoord) -> Result<()> {
        if coord.is_within(self.rows(), self.columns()) {
            Ok(())
        } else {
            Err(SpiralError::CoordinateOutOfBounds {
                row: coord.row,
                column: coord.column,
                rows: self.rows(),
                columns: self.columns(),
            })
        }
    }

    /// Reject orders outside `1..=cell_count()`.
    fn check_order(&self, order: u64) -> Result<()> {
        let cell_count = self.cell_count();
        if (1..=cell_count).contains(&order) {
            Ok(())
        } else {
            Err(SpiralError::OrderOutOfBounds { order, cell_count })
        }
    }

    /// Row-major matrix holding each cell's traversal order.
    ///
    /// Every entry is filled by a full round trip: the order is mapped to its
    /// cell and the cell mapped back to the order stored there. The matrix
    /// holds `cell_count()` entries; callers bound the grid size.
    ///
    /// # Panics
    ///
    /// Panics if `cell_count()` does not fit in `usize`.
    fn order_matrix(&self) -> Result<Vec<Vec<u64>>> {
        let cell_count = self.cell_count();
        if usize::try_from(cell_count).is_err() {
            panic!("order matrix of {cell_count} cells exceeds the address space");
        }
        let columns = self.columns() as usize;
        let mut matrix = vec![vec![0; columns]; self.rows() as usize];

        for order in 1..=self.cell_count() {
            let coord = self.coordinates(order)?;
            let index = self.index_of(coord)?;
            matrix[coord.row as usize - 1][coord.column as usize - 1] = index;
        }

        Ok(matrix)
    }

    /// Iterate over all cells in traversal order.
    fn iter(&self) -> Spiral<'_, Self>
    where
        Self: Sized,
    {
        Spiral::new(self)
    }
}

/// Iterator over grid cells in spiral order.
pub struct Spiral<'a, T: ?Sized> {
    traversal: &'a T,
    next_order: u64,
    last_order: u64,
}

impl<'a, T: SpiralTraversal + ?Sized> Spiral<'a, T> {
    /// Iterate over every cell of the grid.
    pub fn new(traversal: &'a T) -> Self {
        Self {
            traversal,
            next_order: 1,
            last_order: traversal.cell_count(),
        }
    }

    /// Iterate over the cells of rings `start_ring..=end_ring`.
    pub fn rings(traversal: &'a T, start_ring: u32, end_ring: u32) -> Self {
        let next_order = traversal.cells_through(start_ring.saturating_sub(1)) + 1;
        let last_order = if end_ring < start_ring {
            next_order - 1
        } else {
            traversal.cells_through(end_ring)
        };

        Self {
            traversal,
            next_order,
            last_order,
        }
    }

    fn remaining(&self) -> u64 {
        (self.last_order + 1).saturating_sub(self.next_order)
    }
}

impl<T: SpiralTraversal + ?Sized> Iterator for Spiral<'_, T> {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_order > self.last_order {
            return None;
        }

        let order = self.next_order;
        let coord = match self.traversal.coordinates(order) {
            Ok(coord) => coord,
            Err(err) => panic!("grid rejected its own traversal order {order}: {err}"),
        };
        self.next_order += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Exact while the remaining cells fit in `usize`, which holds for every
/// grid on 64-bit targets.
impl<T: SpiralTraversal + ?Sized> ExactSizeIterator for Spiral<'_, T> {}
