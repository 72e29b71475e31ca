//! Image splitting command
//!
//! This module implements the default command: split the input image into
//! grid pieces and write each one as a PNG file.

use clap::ArgMatches;
use log::{info, error};

use crate::api::ImageSplitter;
use crate::commands::command_traits::Command;
use crate::commands::options::RunOptions;
use crate::split::errors::SplitResult;
use crate::utils::logger::Logger;

/// Command for writing every grid cell to disk
pub struct SplitCommand<'a> {
    /// Parsed input and split options
    options: RunOptions,
    /// Draw a progress bar while writing
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SplitCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SplitResult<Self> {
        info!("Creating new split command from arguments");
        let options = RunOptions::from_args(args)?;

        Ok(SplitCommand {
            options,
            show_progress: args.get_flag("verbose"),
            logger,
        })
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn name(&self) -> &'static str {
        "split"
    }

    fn execute(&self) -> SplitResult<()> {
        info!("Splitting {} with prefix {}", self.options.input_file, self.options.split.prefix);

        let splitter = ImageSplitter::new(self.logger).with_progress(self.show_progress);
        match splitter.split_file(&self.options.input_file, &self.options.split) {
            Ok(written) => {
                info!("Split successful, {} files written", written.len());
                Ok(())
            },
            Err(e) => {
                error!("Split failed: {}", e);
                Err(e)
            }
        }
    }
}
