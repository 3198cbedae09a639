//! Ring geometry shared by both grid shapes.
//!
//! A grid decomposes into concentric rectangular frames. Ring `r` of a
//! `rows x columns` grid spans rows `r..=rows-r+1` and columns
//! `r..=columns-r+1`, and the spiral walks it in four edges:
//!
//! ```text
//!   Top     →→→→→→→→→↓
//!           ↑        ↓  Right
//!   Left    ↑        ↓
//!           ↑←←←←←←←←←  Bottom
//! ```
//!
//! Each edge owns the corner it starts on, so a ring with vertical block
//! `v = rows-2r+1` and horizontal block `h = columns-2r+1` holds `2(v + h)`
//! cells. The innermost ring of a grid whose shorter side is odd has a zero
//! block and collapses to a single cell, row or column.

use std::fmt;

/// One of the four edges of a ring, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    /// Walked left to right.
    Top,
    /// Walked top to bottom.
    Right,
    /// Walked right to left.
    Bottom,
    /// Walked bottom to top.
    Left,
}

impl Side {
    /// All sides in traversal order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Side for a zero-based quarter of a ring whose edges are equally long.
    pub(crate) fn from_quarter(quarter: u64) -> Self {
        match quarter {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            3 => Self::Left,
            _ => panic!("ring quarter {quarter} out of range 0..4"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Where a traversal order lands inside its ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingPosition {
    /// Ring number, 1 for the outermost frame
    pub ring: u32,
    /// Edge of the ring
    pub side: Side,
    /// 1-indexed position along the edge, in walking direction
    pub offset: u32,
}

impl RingPosition {
    pub(crate) fn new(ring: u64, side: Side, offset: u64) -> Self {
        Self {
            ring: narrow(ring),
            side,
            offset: narrow(offset),
        }
    }
}

/// Number of rings in a grid whose shorter side is `shorter`.
#[inline]
pub const fn loop_count(shorter: u32) -> u32 {
    shorter / 2 + shorter % 2
}

/// Narrow a ring-local quantity back to the coordinate width.
///
/// Rings, offsets and coordinates never exceed the grid dimensions, which
/// are `u32`.
#[inline]
pub(crate) fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("ring quantity {value} exceeds grid bounds"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_count_formula() {
        assert_eq!(loop_count(1), 1);
        assert_eq!(loop_count(2), 1);
        assert_eq!(loop_count(3), 2);
        assert_eq!(loop_count(4), 2);
        assert_eq!(loop_count(9), 5);
        assert_eq!(loop_count(10), 5);
    }

    #[test]
    fn quarters_follow_traversal_order() {
        for (quarter, side) in Side::ALL.iter().enumerate() {
            assert_eq!(Side::from_quarter(quarter as u64), *side);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn fifth_quarter_is_an_invariant_violation() {
        Side::from_quarter(4);
    }

    #[test]
    fn side_names() {
        let names: Vec<_> = Side::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["top", "right", "bottom", "left"]);
    }
}
