//! Spiral traversal of rectangular grids.
//!
//! Rings of an `m x n` grid are rectangular frames with two block sizes: the
//! right and left edges hold `m - 2r + 1` cells and the top and bottom edges
//! `n - 2r + 1`. After `r` full rings an `(m - 2r) x (n - 2r)` rectangle is
//! left, and writing its area as `((m + n - 4r)² - d²) / 4` with `d = |m - n|`
//! turns the ring lookup into an integer square root.
//!
//! When the shorter side is odd the innermost ring has no interior and
//! collapses to a single cell, a single row or a single column.

use crate::ring::{self, RingPosition, Side};
use crate::{GridCoord, Result, SpiralError, SpiralTraversal};

/// Spiral traversal of an `rows x columns` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectangularSpiral {
    rows: u32,
    columns: u32,
    odd_innermost: bool,
    /// Difference between the longer and the shorter side
    aspect_delta: u32,
    cell_count: u64,
    loop_count: u32,
}

/// Edge lengths of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockSizes {
    vertical: u64,
    horizontal: u64,
}

impl RectangularSpiral {
    /// Create the traversal of a `rows x columns` grid.
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(SpiralError::EmptyGrid { rows, columns });
        }

        let shorter = rows.min(columns);
        Ok(Self {
            rows,
            columns,
            odd_innermost: shorter % 2 == 1,
            aspect_delta: rows.abs_diff(columns),
            cell_count: u64::from(rows) * u64::from(columns),
            loop_count: ring::loop_count(shorter),
        })
    }

    /// Whether the innermost ring collapses to a single cell, row or column.
    #[inline]
    pub const fn odd_innermost(&self) -> bool {
        self.odd_innermost
    }

    /// Difference between the longer and the shorter side.
    #[inline]
    pub const fn aspect_delta(&self) -> u32 {
        self.aspect_delta
    }

    fn block_sizes(&self, ring: u64) -> BlockSizes {
        debug_assert!(ring >= 1 && ring <= u64::from(self.loop_count));
        BlockSizes {
            vertical: u64::from(self.rows) + 1 - 2 * ring,
            horizontal: u64::from(self.columns) + 1 - 2 * ring,
        }
    }

    fn cumulative_cells(&self, loops: u64) -> u64 {
        debug_assert!(loops <= u64::from(self.loop_count));

        if loops == u64::from(self.loop_count) {
            return self.cell_count;
        }
        let length = u64::from(self.rows) - 2 * loops;
        let width = u64::from(self.columns) - 2 * loops;
        self.cell_count - length * width
    }

    /// Ring holding the cell visited at `order`.
    ///
    /// Ring `r < L` is finished by `order` exactly when the rectangle left
    /// after it fits in the `m·n - order` unvisited cells, that is when
    /// `m + n - 4r <= isqrt(4(m·n - order) + d²)`. The smallest such `r`,
    /// capped at the innermost ring, is the answer.
    fn ring_containing(&self, order: u64) -> u64 {
        let remaining = u128::from(self.cell_count - order);
        let delta = u128::from(self.aspect_delta);
        let root = (4 * remaining + delta * delta).isqrt();
        let perimeter = u128::from(self.rows) + u128::from(self.columns);

        // root < rows + columns for every valid order
        let estimate = (perimeter - root).div_ceil(4);
        let ring = u64::try_from(estimate)
            .unwrap_or(u64::MAX)
            .clamp(1, u64::from(self.loop_count));

        assert!(
            self.cumulative_cells(ring - 1) < order && order <= self.cumulative_cells(ring),
            "order {order} resolved to ring {ring} of a {}x{} grid",
            self.rows,
            self.columns,
        );
        ring
    }

    fn position_in_ring(&self, ring: u64, cell_in_ring: u64) -> RingPosition {
        let BlockSizes {
            vertical,
            horizontal,
        } = self.block_sizes(ring);
        let innermost = self.odd_innermost && ring == u64::from(self.loop_count);

        if vertical + horizontal == 0 {
            // Center cell of an odd square
            assert!(innermost && cell_in_ring == 1, "empty ring {ring} holds cell {cell_in_ring}");
            return RingPosition::new(ring, Side::Top, cell_in_ring);
        }
        if vertical == 0 {
            // Innermost ring is a single row
            assert!(innermost, "ring {ring} has no vertical extent");
            return RingPosition::new(ring, Side::Top, cell_in_ring);
        }
        if horizontal == 0 {
            // Innermost ring is a single column
            assert!(innermost, "ring {ring} has no horizontal extent");
            return RingPosition::new(ring, Side::Right, cell_in_ring);
        }

        assert!(
            cell_in_ring >= 1 && cell_in_ring <= 2 * (vertical + horizontal),
            "cell {cell_in_ring} does not fit ring {ring} of blocks {vertical}x{horizontal}",
        );

        let (side, offset) = if cell_in_ring <= horizontal {
            (Side::Top, cell_in_ring)
        } else if cell_in_ring <= horizontal + vertical {
            (Side::Right, cell_in_ring - horizontal)
        } else if cell_in_ring <= 2 * horizontal + vertical {
            (Side::Bottom, cell_in_ring - horizontal - vertical)
        } else {
            (Side::Left, cell_in_ring - 2 * horizontal - vertical)
        };
        RingPosition::new(ring, side, offset)
    }
}

impl SpiralTraversal for RectangularSpiral {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn columns(&self) -> u32 {
        self.columns
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

        let (m, n) = (u64::from(self.rows), u64::from(self.columns));
        let ring = u64::from(coord.ring_in(self.rows, self.columns));
        let (row, column) = (u64::from(row), u64::from(column));

        let BlockSizes {
            vertical,
            horizontal,
        } = self.block_sizes(ring);
        let before = self.cumulative_cells(ring - 1);

        let order = if row == ring {
            before + column - ring + 1
        } else if column == n - ring + 1 {
            before + horizontal + row - ring + 1
        } else if row == m - ring + 1 {
            before + horizontal + vertical + n - column - ring + 2
        } else {
            before + 2 * horizontal + vertical + m - row - ring + 2
        };

        assert!(
            (1..=self.cell_count).contains(&order),
            "cell {coord} resolved to order {order} of a {m}x{n} grid",
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
        let (m, n) = (self.rows, self.columns);

        let coord = match side {
            Side::Top => GridCoord::new(ring, ring + (offset - 1)),
            Side::Right => GridCoord::new(ring + (offset - 1), n - ring + 1),
            Side::Bottom => GridCoord::new(m - ring + 1, n - ring - offset + 2),
            Side::Left => GridCoord::new(m - ring - offset + 2, ring),
        };
        Ok(coord)
    }
}
