//! Grid geometry types
//!
//! A `GeometryRequest` is what the user asked for, with any subset of the
//! count/size values left out. A `Geometry` is the fully resolved and
//! validated result produced by the resolver.

use std::num::NonZeroU32;

use super::region::Region;

/// Partially specified grid parameters
///
/// Counts and cell sizes are either unspecified (`None`) or strictly
/// positive. The start offset defaults to the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryRequest {
    pub start_x: u32,
    pub start_y: u32,
    pub rows: Option<NonZeroU32>,
    pub columns: Option<NonZeroU32>,
    pub cell_width: Option<NonZeroU32>,
    pub cell_height: Option<NonZeroU32>,
}

impl GeometryRequest {
    /// Request with nothing specified
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, x: u32, y: u32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// Set the row count; zero means unspecified
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = NonZeroU32::new(rows);
        self
    }

    /// Set the column count; zero means unspecified
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = NonZeroU32::new(columns);
        self
    }

    /// Set the cell width; zero means unspecified
    pub fn with_cell_width(mut self, width: u32) -> Self {
        self.cell_width = NonZeroU32::new(width);
        self
    }

    /// Set the cell height; zero means unspecified
    pub fn with_cell_height(mut self, height: u32) -> Self {
        self.cell_height = NonZeroU32::new(height);
        self
    }
}

/// Fully resolved grid geometry
///
/// Only the resolver constructs these, so every value is positive and the
/// grid fits inside the image it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub(crate) start_x: u32,
    pub(crate) start_y: u32,
    pub(crate) rows: u32,
    pub(crate) columns: u32,
    pub(crate) cell_width: u32,
    pub(crate) cell_height: u32,
}

impl Geometry {
    pub fn start_x(&self) -> u32 {
        self.start_x
    }

    pub fn start_y(&self) -> u32 {
        self.start_y
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }

    /// Source rectangle of the cell at `(row, column)`
    pub fn cell_region(&self, row: u32, column: u32) -> Region {
        Region::new(
            self.start_x + column * self.cell_width,
            self.start_y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}
