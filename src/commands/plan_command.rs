//! Grid planning command
//!
//! Resolves the grid for the input image and prints it together with the
//! names the pieces would get, without writing any file.

use std::io::{self, Write};

use clap::ArgMatches;
use log::info;

use crate::api::{ImageSplitter, SplitPlan};
use crate::commands::command_traits::Command;
use crate::commands::options::RunOptions;
use crate::split::errors::SplitResult;
use crate::utils::logger::Logger;

/// Command for printing the resolved grid
pub struct PlanCommand<'a> {
    /// Parsed input and split options
    options: RunOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PlanCommand<'a> {
    /// Create a new plan command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SplitResult<Self> {
        info!("Creating new plan command from arguments");
        let options = RunOptions::from_args(args)?;

        Ok(PlanCommand { options, logger })
    }

    /// Write a human-readable description of `plan` to `out`
    pub fn write_plan<W: Write>(plan: &SplitPlan, out: &mut W) -> io::Result<()> {
        let g = &plan.geometry;
        writeln!(out, "Source: {}x{}", plan.source_size.0, plan.source_size.1)?;
        writeln!(out, "Start: {},{}", g.start_x(), g.start_y())?;
        writeln!(out, "Grid: {} rows x {} columns", g.rows(), g.columns())?;
        writeln!(out, "Cell: {}x{}", g.cell_width(), g.cell_height())?;
        writeln!(out, "Pieces: {}", g.cell_count())?;

        for (row, column, path) in plan.output_paths() {
            let region = g.cell_region(row, column);
            writeln!(out, "  {} <- x={} y={}", path.display(), region.x, region.y)?;
        }
        Ok(())
    }
}

impl<'a> Command for PlanCommand<'a> {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn execute(&self) -> SplitResult<()> {
        info!("Planning split of {}", self.options.input_file);

        let plan = ImageSplitter::new(self.logger).plan(&self.options.input_file, &self.options.split)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        Self::write_plan(&plan, &mut out)?;

        self.logger.log(&format!("Planned {} pieces for {}", plan.geometry.cell_count(), self.options.input_file))?;
        Ok(())
    }
}
