//! Command pattern interfaces
//!
//! Each CLI mode (writing pieces, printing the plan) is a `Command`; the
//! factory inspects the parsed arguments and picks one.

use clap::ArgMatches;

use crate::split::errors::SplitResult;
use crate::utils::logger::Logger;

/// A runnable CLI operation
pub trait Command {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Run the operation to completion
    fn execute(&self) -> SplitResult<()>;
}

/// Chooses and builds the command for a set of CLI arguments
pub trait CommandFactory<'a> {
    /// Build the command selected by `args`
    ///
    /// Argument values are validated here, so a command that is returned
    /// only fails for reasons found while running (bad geometry, I/O).
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SplitResult<Box<dyn Command + 'a>>;
}
