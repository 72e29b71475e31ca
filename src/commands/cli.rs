//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `imgsplit` binary
///
/// `-h` sets the cell height, so help is only available as `--help`.
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("imgsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split an image into a grid of equally sized PNG pieces")
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("input")
                .help("Input image file (the last one given is used)")
                .value_name("FILE")
                .index(1)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .help("Top-left corner of the grid as X,Y")
                .value_name("X,Y"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .help("Width of each piece in pixels")
                .value_name("W"),
        )
        .arg(
            Arg::new("height")
                .short('h')
                .long("height")
                .help("Height of each piece in pixels")
                .value_name("H"),
        )
        .arg(
            Arg::new("rows")
                .short('r')
                .long("rows")
                .help("Number of rows")
                .value_name("ROWS"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .help("Number of columns")
                .value_name("COLUMNS"),
        )
        .arg(
            Arg::new("linear")
                .short('1')
                .long("linear")
                .help("Name pieces by a single index: PREFIX_N.png")
                .action(ArgAction::SetTrue)
                .overrides_with("grid"),
        )
        .arg(
            Arg::new("grid")
                .short('2')
                .long("grid")
                .help("Name pieces by row and column: PREFIX_ROW_COLUMN.png (default)")
                .action(ArgAction::SetTrue)
                .overrides_with("linear"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .help("Output prefix (default: input path without extension)")
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with default split options")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("plan")
                .long("plan")
                .help("Print the resolved grid and output names without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append a detailed log to this file")
                .value_name("FILE"),
        )
}
