//! CLI configuration.
//!
//! Defaults come from environment variables and are overridden by command
//! line arguments:
//!
//! | Variable              | Default | Meaning                           |
//! |-----------------------|---------|-----------------------------------|
//! | `SPIRAL_ROWS`         | `9`     | grid rows                         |
//! | `SPIRAL_COLUMNS`      | `9`     | grid columns                      |
//! | `SPIRAL_SHAPE`        | `auto`  | `auto`, `square` or `rect`        |
//! | `SPIRAL_FORMAT`       | `text`  | `text` or `json`                  |
//! | `SPIRAL_VALIDATE_MAX` | `32`    | largest side for `validate`       |
//!
//! `show` refuses grids of more than [`crate::MAX_MATRIX_CELLS`] cells;
//! `locate` and `index` accept any grid size.

use std::str::FromStr;

use crate::error::{CliError, Result};

/// Which traversal formulas to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeChoice {
    /// Square formulas for square grids, rectangular otherwise
    #[default]
    Auto,
    /// Square formulas; the grid must be square
    Square,
    /// Rectangular formulas, even for square grids
    Rectangular,
}

impl FromStr for ShapeChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "square" => Ok(Self::Square),
            "rect" | "rectangular" => Ok(Self::Rectangular),
            _ => Err(CliError::InvalidValue {
                name: "shape",
                value: s.to_string(),
                reason: "expected auto, square or rect".to_string(),
            }),
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// One JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidValue {
                name: "format",
                value: s.to_string(),
                reason: "expected text or json".to_string(),
            }),
        }
    }
}

/// What the CLI does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the order matrix of the grid
    #[default]
    Show,
    /// Cross-validate every grid up to `max_size` on each side
    Validate { max_size: u32 },
    /// Print the cell visited at `order`
    Locate { order: u64 },
    /// Print the order of a cell
    Index { row: u32, column: u32 },
    /// Print usage
    Help,
}

/// Full CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Grid rows
    pub rows: u32,
    /// Grid columns
    pub columns: u32,
    /// Traversal formulas to use
    pub shape: ShapeChoice,
    /// Output format
    pub format: OutputFormat,
    /// Largest side swept by `validate` when no size is given
    pub validate_max: u32,
    /// Command to run
    pub command: Command,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 9,
            shape: ShapeChoice::Auto,
            format: OutputFormat::Text,
            validate_max: 32,
            command: Command::Show,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let rows = match lookup("SPIRAL_ROWS") {
            Some(value) => parse_number("SPIRAL_ROWS", &value)?,
            None => defaults.rows,
        };
        let columns = match lookup("SPIRAL_COLUMNS") {
            Some(value) => parse_number("SPIRAL_COLUMNS", &value)?,
            None => defaults.columns,
        };
        let shape = match lookup("SPIRAL_SHAPE") {
            Some(value) => value.parse()?,
            None => defaults.shape,
        };
        let format = match lookup("SPIRAL_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.format,
        };
        let validate_max = match lookup("SPIRAL_VALIDATE_MAX") {
            Some(value) => parse_number("SPIRAL_VALIDATE_MAX", &value)?,
            None => defaults.validate_max,
        };

        Ok(Self {
            rows,
            columns,
            shape,
            format,
            validate_max,
            command: defaults.command,
        })
    }

    /// Override settings from command line arguments (without the program
    /// name).
    ///
    /// ```text
    /// [--rows N] [--columns N] [--size N] [--shape S] [--json]
    ///     [show | validate [MAX] | locate ORDER | index ROW COLUMN | help]
    /// ```
    pub fn apply_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rows" | "-r" => self.rows = parse_number("rows", &next_value(&mut args, "rows")?)?,
                "--columns" | "-c" => {
                    self.columns = parse_number("columns", &next_value(&mut args, "columns")?)?
                }
                "--size" | "-n" => {
                    let size = parse_number("size", &next_value(&mut args, "size")?)?;
                    self.rows = size;
                    self.columns = size;
                }
                "--shape" => self.shape = next_value(&mut args, "shape")?.parse()?,
                "--format" => self.format = next_value(&mut args, "format")?.parse()?,
                "--json" => self.format = OutputFormat::Json,
                "--help" | "-h" => self.command = Command::Help,
                _ => positional.push(arg),
            }
        }

        if self.command == Command::Help {
            return Ok(self);
        }

        let mut positional = positional.into_iter();
        self.command = match positional.next().as_deref() {
            None | Some("show") => Command::Show,
            Some("help") => Command::Help,
            Some("validate") => Command::Validate {
                max_size: match positional.next() {
                    Some(value) => parse_number("validation size", &value)?,
                    None => self.validate_max,
                },
            },
            Some("locate") => Command::Locate {
                order: parse_number(
                    "order",
                    &positional.next().ok_or(CliError::MissingArgument("order"))?,
                )?,
            },
            Some("index") => {
                let row = positional.next().ok_or(CliError::MissingArgument("row"))?;
                let column = positional
                    .next()
                    .ok_or(CliError::MissingArgument("column"))?;
                Command::Index {
                    row: parse_number("row", &row)?,
                    column: parse_number("column", &column)?,
                }
            }
            Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }

        Ok(self)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, name: &'static str) -> Result<String> {
    args.next().ok_or(CliError::MissingArgument(name))
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| CliError::InvalidValue {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.rows, 9);
        assert_eq!(config.columns, 9);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("SPIRAL_ROWS", "4"),
            ("SPIRAL_COLUMNS", " 7 "),
            ("SPIRAL_SHAPE", "rect"),
            ("SPIRAL_FORMAT", "JSON"),
            ("SPIRAL_VALIDATE_MAX", "12"),
        ]))
        .unwrap();

        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, 7);
        assert_eq!(config.shape, ShapeChoice::Rectangular);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.validate_max, 12);
    }

    #[test]
    fn bad_environment_value() {
        let err = CliConfig::from_lookup(lookup_from(&[("SPIRAL_ROWS", "many")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { name: "SPIRAL_ROWS", .. }));

        let err = CliConfig::from_lookup(lookup_from(&[("SPIRAL_SHAPE", "hex")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { name: "shape", .. }));
    }

    #[test]
    fn arguments_override_environment() {
        let config = CliConfig::default()
            .apply_args(args(&["--rows", "2", "-c", "3", "--json"]))
            .unwrap();
        assert_eq!((config.rows, config.columns), (2, 3));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.command, Command::Show);

        let config = CliConfig::default()
            .apply_args(args(&["--size", "5", "--shape", "square"]))
            .unwrap();
        assert_eq!((config.rows, config.columns), (5, 5));
        assert_eq!(config.shape, ShapeChoice::Square);
    }

    #[test]
    fn commands() {
        let parse = |list: &[&str]| CliConfig::default().apply_args(args(list)).unwrap().command;

        assert_eq!(parse(&[]), Command::Show);
        assert_eq!(parse(&["show"]), Command::Show);
        assert_eq!(parse(&["validate"]), Command::Validate { max_size: 32 });
        assert_eq!(parse(&["validate", "10"]), Command::Validate { max_size: 10 });
        assert_eq!(parse(&["locate", "81"]), Command::Locate { order: 81 });
        assert_eq!(parse(&["index", "5", "5"]), Command::Index { row: 5, column: 5 });
        assert_eq!(parse(&["-n", "4", "index", "2", "3"]), Command::Index { row: 2, column: 3 });
        assert_eq!(parse(&["help"]), Command::Help);
        assert_eq!(parse(&["locate", "--help"]), Command::Help);
    }

    #[test]
    fn command_errors() {
        let parse = |list: &[&str]| CliConfig::default().apply_args(args(list)).unwrap_err();

        assert!(matches!(parse(&["spin"]), CliError::UnknownCommand(cmd) if cmd == "spin"));
        assert!(matches!(parse(&["locate"]), CliError::MissingArgument("order")));
        assert!(matches!(parse(&["index", "1"]), CliError::MissingArgument("column")));
        assert!(matches!(parse(&["locate", "-3"]), CliError::InvalidValue { name: "order", .. }));
        assert!(matches!(parse(&["show", "now"]), CliError::UnexpectedArgument(arg) if arg == "now"));
        assert!(matches!(parse(&["--rows"]), CliError::MissingArgument("rows")));
    }
}
