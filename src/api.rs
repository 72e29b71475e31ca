use std::path::PathBuf;

use log::{debug, info, error};

use crate::io::{load_surface, save_png};
use crate::split::errors::SplitResult;
use crate::split::geometry::{Geometry, GeometryRequest};
use crate::split::naming::{IndexMode, NamingScheme};
use crate::split::resolver::ParameterResolver;
use crate::split::splitter::GridSplitter;
use crate::surface::{PixelSurface, Surface};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// What to split and how to name the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Requested grid, possibly incomplete
    pub request: GeometryRequest,
    /// Naming mode for output files
    pub mode: IndexMode,
    /// Output path prefix, e.g. `photos/beach` for `photos/beach_0_0.png`
    pub prefix: String,
}

/// Resolved split, before any file is written
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub geometry: Geometry,
    pub naming: NamingScheme,
    pub prefix: String,
    /// Size of the source image
    pub source_size: (u32, u32),
}

impl SplitPlan {
    /// Output path of the cell at `(row, column)`
    pub fn output_path(&self, row: u32, column: u32) -> PathBuf {
        PathBuf::from(self.naming.file_name(&self.prefix, row, column))
    }

    /// Every output path in enumeration order
    pub fn output_paths(&self) -> impl Iterator<Item = (u32, u32, PathBuf)> + '_ {
        let columns = self.geometry.columns();
        (0..self.geometry.rows())
            .flat_map(move |row| (0..columns).map(move |column| (row, column)))
            .map(move |(row, column)| (row, column, self.output_path(row, column)))
    }
}

/// Main interface to the splitting library
pub struct ImageSplitter<'a> {
    logger: &'a Logger,
    show_progress: bool,
}

impl<'a> ImageSplitter<'a> {
    /// Create a new splitter
    ///
    /// # Arguments
    /// * `logger` - Logger receiving the run summary
    pub fn new(logger: &'a Logger) -> Self {
        ImageSplitter { logger, show_progress: false }
    }

    /// Draw a progress bar while writing pieces
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve the grid for an image already in memory
    pub fn plan_surface(&self, source: &PixelSurface, options: &SplitOptions) -> SplitResult<SplitPlan> {
        let source_size = (source.width(), source.height());
        let geometry = ParameterResolver::new(source_size.0, source_size.1).resolve(&options.request)?;
        let naming = NamingScheme::new(options.mode, geometry.rows(), geometry.columns());

        info!(
            "Grid: {} rows x {} columns of {}x{} starting at ({}, {})",
            geometry.rows(),
            geometry.columns(),
            geometry.cell_width(),
            geometry.cell_height(),
            geometry.start_x(),
            geometry.start_y()
        );

        Ok(SplitPlan { geometry, naming, prefix: options.prefix.clone(), source_size })
    }

    /// Load an image and resolve its grid without writing anything
    ///
    /// # Arguments
    /// * `input_path` - Path to the source image
    /// * `options` - Requested grid and naming
    pub fn plan(&self, input_path: &str, options: &SplitOptions) -> SplitResult<SplitPlan> {
        let source = load_surface(input_path)?;
        self.plan_surface(&source, options)
    }

    /// Split an image file into PNG pieces
    ///
    /// Geometry problems are reported before any file is written. A failure
    /// while writing stops the run and leaves earlier pieces on disk.
    ///
    /// # Arguments
    /// * `input_path` - Path to the source image
    /// * `options` - Requested grid and naming
    ///
    /// # Returns
    /// Paths of the written files in enumeration order
    pub fn split_file(&self, input_path: &str, options: &SplitOptions) -> SplitResult<Vec<PathBuf>> {
        let source = load_surface(input_path)?;
        self.split_surface(&source, options)
    }

    /// Split an in-memory image into PNG pieces
    pub fn split_surface(&self, source: &PixelSurface, options: &SplitOptions) -> SplitResult<Vec<PathBuf>> {
        let plan = self.plan_surface(source, options)?;
        let total = plan.geometry.cell_count();

        let progress = if self.show_progress {
            ProgressTracker::new(total, "Writing pieces")
        } else {
            ProgressTracker::hidden(total)
        };

        let mut written = Vec::new();
        let mut splitter = GridSplitter::start(source, plan.geometry);
        loop {
            let piece = match splitter.next_piece() {
                Ok(Some(piece)) => piece,
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to extract piece at {:?}: {}", splitter.cursor(), e);
                    progress.abandon("Failed");
                    return Err(e);
                }
            };

            let path = plan.output_path(piece.row, piece.column);
            if let Err(e) = save_png(&piece.surface, &path) {
                progress.abandon("Failed");
                return Err(e);
            }
            debug!("Wrote cell ({}, {}) to {}", piece.row, piece.column, path.display());

            written.push(path);
            progress.increment(1);
        }
        progress.finish();

        info!("Wrote {} pieces", written.len());
        self.logger.log(&format!("Split into {} pieces with prefix {}", written.len(), plan.prefix))?;
        Ok(written)
    }
}
