//! Conversion of parsed CLI arguments into split options

use clap::ArgMatches;
use log::{info, warn};

use crate::api::SplitOptions;
use crate::config::SplitDefaults;
use crate::split::errors::{ParameterError, SplitResult};
use crate::split::naming::IndexMode;
use crate::utils::string_utils;

/// Input path and options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input_file: String,
    pub split: SplitOptions,
}

impl RunOptions {
    /// Build run options from CLI arguments
    ///
    /// Values given on the command line override those from `--config`.
    pub fn from_args(args: &ArgMatches) -> SplitResult<Self> {
        let inputs: Vec<&String> = args.get_many::<String>("input").map(|v| v.collect()).unwrap_or_default();
        let input_file = inputs.last().map(|s| s.to_string()).ok_or(ParameterError::MissingInput)?;
        if inputs.len() > 1 {
            warn!("Several input files given, using the last one: {}", input_file);
        }
        info!("Input file: {}", input_file);

        let defaults = match args.get_one::<String>("config") {
            Some(path) => {
                info!("Reading defaults from {}", path);
                SplitDefaults::from_file(path)?
            }
            None => SplitDefaults::default(),
        };

        let mut request = defaults.request;
        if let Some(start) = args.get_one::<String>("start") {
            let (x, y) = string_utils::parse_start_position(start)?;
            request = request.with_start(x, y);
        }
        if let Some(w) = Self::positive(args, "width")? {
            request = request.with_cell_width(w);
        }
        if let Some(h) = Self::positive(args, "height")? {
            request = request.with_cell_height(h);
        }
        if let Some(r) = Self::positive(args, "rows")? {
            request = request.with_rows(r);
        }
        if let Some(c) = Self::positive(args, "columns")? {
            request = request.with_columns(c);
        }
        info!("Requested geometry: {:?}", request);

        let mode = if args.get_flag("linear") {
            IndexMode::Linear
        } else if args.get_flag("grid") {
            IndexMode::Grid
        } else {
            defaults.mode.unwrap_or_default()
        };
        info!("Naming mode: {:?}", mode);

        let prefix = args
            .get_one::<String>("prefix")
            .cloned()
            .or(defaults.prefix)
            .unwrap_or_else(|| string_utils::derive_prefix(&input_file));
        info!("Output prefix: {}", prefix);

        Ok(RunOptions {
            input_file,
            split: SplitOptions { request, mode, prefix },
        })
    }

    fn positive(args: &ArgMatches, name: &'static str) -> SplitResult<Option<u32>> {
        match args.get_one::<String>(name) {
            Some(value) => Ok(Some(string_utils::parse_positive(name, value)?)),
            None => Ok(None),
        }
    }
}
