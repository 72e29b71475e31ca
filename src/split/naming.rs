//! Output naming for grid cells
//!
//! Cells are named either by a single linear index or by their
//! `(row, column)` pair. Numbers are zero padded to a fixed width so that
//! names sort in enumeration order.

use std::fmt;
use std::str::FromStr;

use super::errors::ParameterError;

/// How a cell identifier is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// `row * columns + column`
    Linear,
    /// `(row, column)`
    #[default]
    Grid,
}

impl FromStr for IndexMode {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "1" => Ok(IndexMode::Linear),
            "grid" | "2" => Ok(IndexMode::Grid),
            _ => Err(ParameterError::InvalidValue { name: "mode", value: s.to_string() }),
        }
    }
}

/// Number of decimal digits in `n`, at least 1
pub fn digit_width(n: u64) -> usize {
    let mut width = 1;
    let mut n = n / 10;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width
}

/// Identifier of one cell, carrying its padding width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellId {
    Linear { index: u64, width: usize },
    Grid { row: u32, column: u32, width: usize },
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CellId::Linear { index, width } => write!(f, "{:0width$}", index, width = width),
            CellId::Grid { row, column, width } => {
                write!(f, "{:0width$}_{:0width$}", row, column, width = width)
            }
        }
    }
}

/// Naming policy for one grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingScheme {
    mode: IndexMode,
    columns: u32,
    width: usize,
}

impl NamingScheme {
    /// Build the scheme for a grid of `rows` x `columns`
    ///
    /// Both counts must be positive, which a resolved geometry guarantees.
    pub fn new(mode: IndexMode, rows: u32, columns: u32) -> Self {
        let bound = match mode {
            IndexMode::Linear => (rows as u64 * columns as u64).saturating_sub(1),
            IndexMode::Grid => (rows.max(columns) as u64).saturating_sub(1),
        };

        NamingScheme { mode, columns, width: digit_width(bound) }
    }

    /// Zero padding applied to every number
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn identifier(&self, row: u32, column: u32) -> CellId {
        match self.mode {
            IndexMode::Linear => CellId::Linear {
                index: row as u64 * self.columns as u64 + column as u64,
                width: self.width,
            },
            IndexMode::Grid => CellId::Grid { row, column, width: self.width },
        }
    }

    /// Output file name for a cell, e.g. `tiles_03_11.png`
    pub fn file_name(&self, prefix: &str, row: u32, column: u32) -> String {
        format!("{}_{}.png", prefix, self.identifier(row, column))
    }
}
