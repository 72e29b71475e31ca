//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod options;
pub mod split_command;
pub mod plan_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use options::RunOptions;
pub use split_command::SplitCommand;
pub use plan_command::PlanCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::split::errors::SplitResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ImgSplitCommandFactory;

impl ImgSplitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ImgSplitCommandFactory
    }
}

impl Default for ImgSplitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ImgSplitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SplitResult<Box<dyn Command + 'a>> {
        if args.get_flag("plan") {
            Ok(Box::new(PlanCommand::new(args, logger)?))
        } else {
            // Default to writing the pieces
            Ok(Box::new(SplitCommand::new(args, logger)?))
        }
    }
}
