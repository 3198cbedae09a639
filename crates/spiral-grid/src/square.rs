//! Spiral traversal of square grids.
//!
//! In an `n x n` grid every ring is a square frame whose four edges share one
//! block size, `n - 2r + 1`. Through ring `r` the spiral has visited
//! `4r(n - r)` cells, and the cells still unvisited form an `(n - 2r)` square,
//! which makes the ring of any order an integer square root away.

use crate::ring::{self, RingPosition, Side};
use crate::{GridCoord, Result, SpiralError, SpiralTraversal};

/// Spiral traversal of an `n x n` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareSpiral {
    size: u32,
    odd_innermost: bool,
    cell_count: u64,
    loop_count: u32,
}

impl SquareSpiral {
    /// Create the traversal of an `size x size` grid.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(SpiralError::EmptyGrid {
                rows: size,
                columns: size,
            });
        }

        Ok(Self {
            size,
            odd_innermost: size % 2 == 1,
            cell_count: u64::from(size) * u64::from(size),
            loop_count: ring::loop_count(size),
        })
    }

    /// Side length of the grid.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Whether the innermost ring is a single center cell.
    #[inline]
    pub const fn odd_innermost(&self) -> bool {
        self.odd_innermost
    }

    /// Cells along one edge of `ring`, not counting the corner the next
    /// edge starts on.
    #[inline]
    fn block_size(&self, ring: u64) -> u64 {
        debug_assert!(ring >= 1 && ring <= u64::from(self.loop_count));
        u64::from(self.size) + 1 - 2 * ring
    }

    fn cumulative_cells(&self, loops: u64) -> u64 {
        debug_assert!(loops <= u64::from(self.loop_count));

        if self.odd_innermost && loops == u64::from(self.loop_count) {
            return self.cell_count;
        }
        4 * loops * (u64::from(self.size) - loops)
    }

    /// Ring holding the cell visited at `order`.
    ///
    /// With `s = isqrt(n² - order)` the unvisited square after `order` has a
    /// side of `s` or `s - 1`, whichever shares the parity of `n`, so the ring
    /// is `(n + 1 - s) / 2` exactly.
    fn ring_containing(&self, order: u64) -> u64 {
        let remaining = self.cell_count - order;
        let root = remaining.isqrt();
        let ring = (u64::from(self.size) + 1 - root) / 2;

        assert!(
            ring >= 1
                && self.cumulative_cells(ring - 1) < order
                && order <= self.cumulative_cells(ring),
            "order {order} resolved to ring {ring} of a {n}x{n} grid",
            n = self.size,
        );
        ring
    }

    fn position_in_ring(&self, ring: u64, cell_in_ring: u64) -> RingPosition {
        let block = self.block_size(ring);

        if block == 0 {
            // Center cell of an odd grid
            assert!(
                self.odd_innermost && ring == u64::from(self.loop_count) && cell_in_ring == 1,
                "empty block in ring {ring} of a {n}x{n} grid",
                n = self.size,
            );
            return RingPosition::new(ring, Side::Top, 1);
        }

        assert!(
            cell_in_ring >= 1 && cell_in_ring <= 4 * block,
            "cell {cell_in_ring} does not fit ring {ring} with block {block}",
        );

        let side = Side::from_quarter((cell_in_ring - 1) / block);
        let offset = (cell_in_ring - 1) % block + 1;
        RingPosition::new(ring, side, offset)
    }
}

impl SpiralTraversal for SquareSpiral {
    fn rows(&self) -> u32 {
        self.size
    }

    fn columns(&self) -> u32 {
        self.size
    }

    fn cell_count(&self) -> u64 {
        self.cell_count
    }

    fn loop_count(&self) -> u32 {
        self.loop_count
    }

    fn cells_through(&self, loops: u32) -> u64 {
        self.cumulative_cells(u64::from(loops.min(self.loop_count)))
    }

    fn index(&self, row: u32, column: u32) -> Result<u64> {
        let coord = GridCoord::new(row, column);
        self.check_coord(coord)?;

        let n = u64::from(self.size);
        let ring = u64::from(coord.ring_in(self.size, self.size));
        let (row, column) = (u64::from(row), u64::from(column));

        let block = self.block_size(ring);
        let before = self.cumulative_cells(ring - 1);
        let far = n - ring + 1;

        let order = if row == ring {
            before + column - ring + 1
        } else if column == far {
            before + block + row - ring + 1
        } else if row == far {
            before + 2 * block + n - column - ring + 2
        } else {
            before + 3 * block + n - row - ring + 2
        };

        assert!(
            (1..=self.cell_count).contains(&order),
            "cell {coord} resolved to order {order} of a {n}x{n} grid",
        );
        Ok(order)
    }

    fn ring_position(&self, order: u64) -> Result<RingPosition> {
        self.check_order(order)?;

        let ring = self.ring_containing(order);
        let cell_in_ring = order - self.cumulative_cells(ring - 1);
        Ok(self.position_in_ring(ring, cell_in_ring))
    }

    fn coordinates(&self, order: u64) -> Result<GridCoord> {
        let RingPosition { ring, side, offset } = self.ring_position(order)?;
        let n = self.size;

        let coord = match side {
            Side::Top => GridCoord::new(ring, ring + (offset - 1)),
            Side::Right => GridCoord::new(ring + (offset - 1), n - ring + 1),
            Side::Bottom => GridCoord::new(n - ring + 1, n - ring - offset + 2),
            Side::Left => GridCoord::new(n - ring - offset + 2, ring),
        };
        Ok(coord)
    }
}
