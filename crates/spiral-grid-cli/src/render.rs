//! Text and JSON rendering of traversal results.

use serde::Serialize;
use spiral_grid::validate::SweepSummary;
use spiral_grid::{GridCoord, RingPosition};

/// Order matrix of one grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixDocument {
    pub rows: u32,
    pub columns: u32,
    pub shape: &'static str,
    pub matrix: Vec<Vec<u64>>,
}

/// Answer to a single order or cell query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellDocument {
    pub order: u64,
    pub coord: GridCoord,
    pub position: RingPosition,
}

/// Result of a validation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepDocument {
    pub max_size: u32,
    pub grids_checked: u64,
    pub cells_checked: u64,
}

impl From<SweepSummary> for SweepDocument {
    fn from(summary: SweepSummary) -> Self {
        Self {
            max_size: summary.max_size,
            grids_checked: summary.grids_checked,
            cells_checked: summary.cells_checked,
        }
    }
}

/// Render an order matrix as right-aligned columns.
///
/// Every entry is padded to the width of the largest order plus three, and
/// each row is followed by a blank line.
pub fn matrix_text(document: &MatrixDocument) -> String {
    let cell_count = u64::from(document.rows) * u64::from(document.columns);
    let width = cell_count.to_string().len() + 3;

    let mut out = String::new();
    for row in &document.matrix {
        for order in row {
            out.push_str(&format!("{order:>width$}"));
        }
        out.push_str("\n\n");
    }
    out
}

/// Render a located cell as one line.
pub fn cell_text(document: &CellDocument) -> String {
    let RingPosition { ring, side, offset } = document.position;
    format!(
        "order {} is cell {} (ring {ring}, {side} edge, offset {offset})",
        document.order, document.coord
    )
}

/// Render a sweep summary as one line.
pub fn sweep_text(document: &SweepDocument) -> String {
    format!(
        "validated {} traversals ({} cells) for every grid up to {}x{}",
        document.grids_checked, document.cells_checked, document.max_size, document.max_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_grid::Side;

    #[test]
    fn three_by_three_text() {
        let document = MatrixDocument {
            rows: 3,
            columns: 3,
            shape: "square",
            matrix: vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]],
        };
        assert_eq!(
            matrix_text(&document),
            "   1   2   3\n\n   8   9   4\n\n   7   6   5\n\n"
        );
    }

    #[test]
    fn width_follows_largest_order() {
        let document = MatrixDocument {
            rows: 2,
            columns: 5,
            shape: "rectangular",
            matrix: vec![vec![1, 2, 3, 4, 5], vec![10, 9, 8, 7, 6]],
        };
        let text = matrix_text(&document);
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line.len(), 5 * 5);
        assert!(text.contains("   10    9"));
    }

    #[test]
    fn matrix_json() {
        let document = MatrixDocument {
            rows: 2,
            columns: 3,
            shape: "rectangular",
            matrix: vec![vec![1, 2, 3], vec![6, 5, 4]],
        };
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"rows":2,"columns":3,"shape":"rectangular","matrix":[[1,2,3],[6,5,4]]}"#
        );
    }

    #[test]
    fn cell_text_and_json() {
        let document = CellDocument {
            order: 6,
            coord: GridCoord::new(3, 2),
            position: RingPosition {
                ring: 1,
                side: Side::Bottom,
                offset: 2,
            },
        };
        assert_eq!(
            cell_text(&document),
            "order 6 is cell (3, 2) (ring 1, bottom edge, offset 2)"
        );
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"order":6,"coord":{"row":3,"column":2},"position":{"ring":1,"side":"bottom","offset":2}}"#
        );
    }

    #[test]
    fn sweep_text_line() {
        let document = SweepDocument {
            max_size: 4,
            grids_checked: 20,
            cells_checked: 130,
        };
        assert_eq!(
            sweep_text(&document),
            "validated 20 traversals (130 cells) for every grid up to 4x4"
        );
    }
}
