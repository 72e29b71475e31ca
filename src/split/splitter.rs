//! Grid cell enumeration
//!
//! `GridSplitter` walks a resolved geometry in row-major order and produces
//! one freshly allocated surface per cell. The source surface is borrowed
//! for the whole enumeration; every produced piece is owned by the caller.

use log::{debug, trace};

use crate::surface::Surface;

use super::errors::SplitResult;
use super::geometry::Geometry;
use super::region::Region;

/// Enumeration progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    /// Started, nothing emitted yet
    Ready,
    /// At least one cell emitted; holds the next cell to produce
    Emitting { next_row: u32, next_column: u32 },
    /// Every cell has been emitted
    Done,
}

/// One extracted cell
#[derive(Debug)]
pub struct Piece<S> {
    pub surface: S,
    pub row: u32,
    pub column: u32,
}

/// Stateful row-major enumerator over the cells of a grid
pub struct GridSplitter<'a, S: Surface> {
    /// Image being split, borrowed for the enumeration
    source: &'a S,
    /// Validated grid geometry
    geometry: Geometry,
    state: SplitState,
}

impl<'a, S: Surface> GridSplitter<'a, S> {
    /// Bind a source surface and geometry; enumeration starts at (0, 0)
    ///
    /// The geometry is expected to come from `ParameterResolver` for an
    /// image of the same size as `source`.
    pub fn start(source: &'a S, geometry: Geometry) -> Self {
        debug!(
            "Starting split of {}x{} surface into {} rows x {} columns",
            source.width(),
            source.height(),
            geometry.rows,
            geometry.columns
        );
        GridSplitter { source, geometry, state: SplitState::Ready }
    }

    pub fn state(&self) -> SplitState {
        self.state
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn is_done(&self) -> bool {
        self.state == SplitState::Done
    }

    /// Indices of the cell the next call will produce, if any
    pub fn cursor(&self) -> Option<(u32, u32)> {
        match self.state {
            SplitState::Ready => Some((0, 0)),
            SplitState::Emitting { next_row, next_column } => Some((next_row, next_column)),
            SplitState::Done => None,
        }
    }

    /// Produce the next cell
    ///
    /// # Returns
    /// `Ok(Some(piece))` for each cell in row-major order, then `Ok(None)`
    /// once the grid is exhausted. On error the cursor does not move, so
    /// calling again retries the same cell.
    pub fn next_piece(&mut self) -> SplitResult<Option<Piece<S>>> {
        let Some((row, column)) = self.cursor() else {
            return Ok(None);
        };

        let region = self.geometry.cell_region(row, column);
        let surface = self.extract(region)?;
        trace!("Extracted cell ({}, {}) at {:?}", row, column, region);

        self.advance(row, column);
        Ok(Some(Piece { surface, row, column }))
    }

    fn extract(&self, region: Region) -> SplitResult<S> {
        let mut piece = S::create(region.width, region.height)?;
        self.source.copy_rect(region, &mut piece)?;
        Ok(piece)
    }

    fn advance(&mut self, row: u32, column: u32) {
        let (mut next_row, mut next_column) = (row, column + 1);
        if next_column == self.geometry.columns {
            next_column = 0;
            next_row += 1;
        }

        self.state = if next_row == self.geometry.rows {
            SplitState::Done
        } else {
            SplitState::Emitting { next_row, next_column }
        };
    }
}

impl<'a, S: Surface> Iterator for GridSplitter<'a, S> {
    type Item = SplitResult<Piece<S>>;

    /// Iterator view of `next_piece`; stops after the first error
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_piece() {
            Ok(Some(piece)) => Some(Ok(piece)),
            Ok(None) => None,
            Err(e) => {
                self.state = SplitState::Done;
                Some(Err(e))
            }
        }
    }
}
