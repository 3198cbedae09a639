//! Spiral Grid CLI
//!
//! Prints the order matrix of a grid, answers single order or cell queries,
//! and cross-validates both traversal implementations over many grid sizes.

pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use serde::Serialize;
use spiral_grid::{validate, Grid, RectangularSpiral, SpiralTraversal, SquareSpiral};
use tracing::{debug, info};

pub use config::{CliConfig, Command, OutputFormat, ShapeChoice};
pub use error::{CliError, Result};
use render::{CellDocument, MatrixDocument, SweepDocument};

/// Largest grid, in cells, whose order matrix `show` assembles.
pub const MAX_MATRIX_CELLS: u64 = 1 << 20;

/// Print usage to stderr.
pub fn print_usage() {
    eprintln!("spiral-grid - clockwise spiral traversal of square and rectangular grids");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  spiral-grid [options] show                 Print the order matrix (up to {MAX_MATRIX_CELLS} cells)");
    eprintln!("  spiral-grid [options] validate [max]       Cross-validate grids up to max x max");
    eprintln!("  spiral-grid [options] locate <order>       Print the cell visited at order");
    eprintln!("  spiral-grid [options] index <row> <col>    Print the order of a cell");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --rows <n>        Grid rows");
    eprintln!("  -c, --columns <n>     Grid columns");
    eprintln!("  -n, --size <n>        Grid rows and columns");
    eprintln!("      --shape <s>       auto, square or rect");
    eprintln!("      --format <f>      text or json");
    eprintln!("      --json            Same as --format json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SPIRAL_ROWS, SPIRAL_COLUMNS, SPIRAL_SHAPE, SPIRAL_FORMAT, SPIRAL_VALIDATE_MAX");
    eprintln!("  RUST_LOG             Log filter (default: spiral_grid=info)");
}

/// Build the traversal selected by the config.
pub fn build_grid(config: &CliConfig) -> Result<Grid> {
    let grid = match config.shape {
        ShapeChoice::Auto => Grid::new(config.rows, config.columns)?,
        ShapeChoice::Square => {
            if config.rows != config.columns {
                return Err(CliError::NotSquare {
                    rows: config.rows,
                    columns: config.columns,
                });
            }
            SquareSpiral::new(config.rows)?.into()
        }
        ShapeChoice::Rectangular => RectangularSpiral::new(config.rows, config.columns)?.into(),
    };
    Ok(grid)
}

fn shape_name(grid: &Grid) -> &'static str {
    match grid {
        Grid::Square(_) => "square",
        Grid::Rectangular(_) => "rectangular",
    }
}

/// Run the configured command, writing results to `out`.
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    match config.command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Validate { max_size } => {
            info!(max_size, "validating spiral traversals");
            let summary = validate::sweep(max_size)?;
            emit(config.format, out, &SweepDocument::from(summary), render::sweep_text)
        }
        Command::Show => {
            let grid = build_grid(config)?;
            let traversal = grid.as_traversal();
            if traversal.cell_count() > MAX_MATRIX_CELLS {
                return Err(CliError::MatrixTooLarge {
                    rows: traversal.rows(),
                    columns: traversal.columns(),
                    cells: traversal.cell_count(),
                    limit: MAX_MATRIX_CELLS,
                });
            }
            debug!(
                rows = traversal.rows(),
                columns = traversal.columns(),
                shape = shape_name(&grid),
                "assembling order matrix"
            );

            let document = MatrixDocument {
                rows: traversal.rows(),
                columns: traversal.columns(),
                shape: shape_name(&grid),
                matrix: traversal.order_matrix()?,
            };
            match config.format {
                OutputFormat::Text => out.write_all(render::matrix_text(&document).as_bytes())?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&document)?)?,
            }
            Ok(())
        }
        Command::Locate { order } => {
            let grid = build_grid(config)?;
            let traversal = grid.as_traversal();
            let document = CellDocument {
                order,
                coord: traversal.coordinates(order)?,
                position: traversal.ring_position(order)?,
            };
            emit(config.format, out, &document, render::cell_text)
        }
        Command::Index { row, column } => {
            let grid = build_grid(config)?;
            let traversal = grid.as_traversal();
            let order = traversal.index(row, column)?;
            let document = CellDocument {
                order,
                coord: traversal.coordinates(order)?,
                position: traversal.ring_position(order)?,
            };
            emit(config.format, out, &document, render::cell_text)
        }
    }
}

fn emit<T: Serialize>(
    format: OutputFormat,
    out: &mut impl Write,
    document: &T,
    text: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text(document))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(document)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_grid::SpiralError;

    fn run_to_string(config: &CliConfig) -> Result<String> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn config(rows: u32, columns: u32, command: Command) -> CliConfig {
        CliConfig {
            rows,
            columns,
            command,
            ..CliConfig::default()
        }
    }

    #[test]
    fn shape_selection() {
        let auto = config(4, 4, Command::Show);
        assert!(matches!(build_grid(&auto).unwrap(), Grid::Square(_)));

        let forced = CliConfig {
            shape: ShapeChoice::Rectangular,
            ..auto.clone()
        };
        assert!(matches!(build_grid(&forced).unwrap(), Grid::Rectangular(_)));

        let not_square = CliConfig {
            shape: ShapeChoice::Square,
            ..config(4, 5, Command::Show)
        };
        assert!(matches!(
            build_grid(&not_square),
            Err(CliError::NotSquare { rows: 4, columns: 5 })
        ));
    }

    #[test]
    fn show_text() {
        let text = run_to_string(&config(2, 3, Command::Show)).unwrap();
        assert_eq!(text, "   1   2   3\n\n   6   5   4\n\n");
    }

    #[test]
    fn show_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..config(3, 3, Command::Show)
        };
        let text = run_to_string(&config).unwrap();
        assert_eq!(
            text,
            "{\"rows\":3,\"columns\":3,\"shape\":\"square\",\"matrix\":[[1,2,3],[8,9,4],[7,6,5]]}\n"
        );
    }

    #[test]
    fn locate_and_index() {
        let text = run_to_string(&config(3, 3, Command::Locate { order: 9 })).unwrap();
        assert_eq!(text, "order 9 is cell (2, 2) (ring 2, top edge, offset 1)\n");

        let text = run_to_string(&config(2, 3, Command::Index { row: 2, column: 1 })).unwrap();
        assert_eq!(text, "order 6 is cell (2, 1) (ring 1, bottom edge, offset 3)\n");
    }

    #[test]
    fn out_of_range_queries() {
        let err = run_to_string(&config(3, 3, Command::Locate { order: 10 })).unwrap_err();
        assert!(matches!(
            err,
            CliError::Spiral(SpiralError::OrderOutOfBounds { order: 10, cell_count: 9 })
        ));

        let err = run_to_string(&config(2, 3, Command::Index { row: 3, column: 1 })).unwrap_err();
        assert!(matches!(err, CliError::Spiral(SpiralError::CoordinateOutOfBounds { .. })));

        let err = run_to_string(&config(0, 3, Command::Show)).unwrap_err();
        assert!(matches!(err, CliError::Spiral(SpiralError::EmptyGrid { .. })));
    }

    #[test]
    fn show_rejects_oversized_matrix() {
        let err = run_to_string(&config(100_000, 100_000, Command::Show)).unwrap_err();
        assert!(matches!(
            err,
            CliError::MatrixTooLarge {
                rows: 100_000,
                columns: 100_000,
                cells: 10_000_000_000,
                limit: MAX_MATRIX_CELLS,
            }
        ));

        // Queries on the same grid stay cheap
        let text = run_to_string(&config(100_000, 100_000, Command::Locate { order: 1 })).unwrap();
        assert!(text.starts_with("order 1 is cell (1, 1)"));
    }

    #[test]
    fn show_at_matrix_limit() {
        let text = run_to_string(&config(1, 1 << 20, Command::Show)).unwrap();
        assert!(text.ends_with("1048576\n\n"));
    }

    #[test]
    fn validate_json() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..config(1, 1, Command::Validate { max_size: 3 })
        };
        let text = run_to_string(&config).unwrap();
        // 9 rectangles plus 3 squares; 36 + 14 cells
        assert_eq!(text, "{\"max_size\":3,\"grids_checked\":12,\"cells_checked\":50}\n");
    }
}
