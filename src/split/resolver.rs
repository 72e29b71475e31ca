//! Geometry resolution and validation
//!
//! Turns a partially specified `GeometryRequest` into a complete `Geometry`
//! for a source image of known size. Missing counts are derived from cell
//! sizes and vice versa, then the whole grid is checked against the image.

use log::{debug, error};

use super::errors::{Axis, ParameterError};
use super::geometry::{Geometry, GeometryRequest};

/// Largest cell count accepted; cell indices must fit a signed 32-bit int
pub const MAX_CELL_INDEX: u32 = i32::MAX as u32;

/// Resolves grid requests against one source image
#[derive(Debug, Clone, Copy)]
pub struct ParameterResolver {
    /// Source image width in pixels
    width: u32,
    /// Source image height in pixels
    height: u32,
}

impl ParameterResolver {
    /// Create a resolver for a `width` x `height` source image
    pub fn new(width: u32, height: u32) -> Self {
        ParameterResolver { width, height }
    }

    /// Derive missing values and validate the request
    ///
    /// Derivation runs in a fixed order: rows from cell height, columns from
    /// cell width, cell height from rows, cell width from columns. Each step
    /// only fills a value that is still missing. Validation then reports the
    /// first problem found; no partial geometry is ever returned.
    pub fn resolve(&self, request: &GeometryRequest) -> Result<Geometry, ParameterError> {
        debug!("Resolving {:?} against {}x{} image", request, self.width, self.height);

        let avail_w = self.width.saturating_sub(request.start_x);
        let avail_h = self.height.saturating_sub(request.start_y);

        let mut rows = request.rows.map(|n| n.get());
        let mut columns = request.columns.map(|n| n.get());
        let mut cell_width = request.cell_width.map(|n| n.get());
        let mut cell_height = request.cell_height.map(|n| n.get());

        if rows.is_none() {
            rows = cell_height.map(|h| avail_h / h);
        }
        if columns.is_none() {
            columns = cell_width.map(|w| avail_w / w);
        }
        if cell_height.is_none() {
            cell_height = rows.filter(|&r| r > 0).map(|r| avail_h / r);
        }
        if cell_width.is_none() {
            cell_width = columns.filter(|&c| c > 0).map(|c| avail_w / c);
        }

        let result = self.validate(request.start_x, request.start_y, rows, columns, cell_width, cell_height);
        match &result {
            Ok(geometry) => debug!("Resolved geometry: {:?}", geometry),
            Err(e) => error!("Geometry rejected: {}", e),
        }
        result
    }

    fn validate(
        &self,
        start_x: u32,
        start_y: u32,
        rows: Option<u32>,
        columns: Option<u32>,
        cell_width: Option<u32>,
        cell_height: Option<u32>,
    ) -> Result<Geometry, ParameterError> {
        if start_x >= self.width {
            return Err(ParameterError::StartOutOfBounds { axis: Axis::X, start: start_x, extent: self.width });
        }
        if start_y >= self.height {
            return Err(ParameterError::StartOutOfBounds { axis: Axis::Y, start: start_y, extent: self.height });
        }

        let rows = require_positive(rows, "Rows")?;
        let columns = require_positive(columns, "Columns")?;
        let cell_width = require_positive(cell_width, "Width")?;
        let cell_height = require_positive(cell_height, "Height")?;

        // Checked by division so the product is never formed
        if rows > MAX_CELL_INDEX / columns {
            return Err(ParameterError::TooManyCells { rows, columns });
        }

        let required_x = start_x as u64 + columns as u64 * cell_width as u64;
        if required_x > self.width as u64 {
            return Err(ParameterError::ExceedsImage { axis: Axis::X, required: required_x, extent: self.width });
        }
        let required_y = start_y as u64 + rows as u64 * cell_height as u64;
        if required_y > self.height as u64 {
            return Err(ParameterError::ExceedsImage { axis: Axis::Y, required: required_y, extent: self.height });
        }

        Ok(Geometry { start_x, start_y, rows, columns, cell_width, cell_height })
    }
}

fn require_positive(value: Option<u32>, name: &'static str) -> Result<u32, ParameterError> {
    match value {
        None => Err(ParameterError::Unspecified(name)),
        Some(0) => Err(ParameterError::NonPositive(name)),
        Some(v) => Ok(v),
    }
}
