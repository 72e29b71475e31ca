use clap::error::ErrorKind;
use std::path::Path;
use std::process;
use log::{error, info};

use imgsplit::utils::logger::Logger;
use imgsplit::commands::{build_cli, CommandFactory, ImgSplitCommandFactory};

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Keep only the first line of clap's report
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or("invalid arguments");
            fail(first.trim_start_matches("error: "));
        }
    };

    let log_file = matches.get_one::<String>("log-file").map(Path::new);
    if let Err(e) = Logger::init_global_logger(log_file, matches.get_flag("verbose")) {
        fail(&format!("Cannot initialize logger: {}", e));
    }

    let logger = match log_file {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => fail(&format!("Cannot open log file: {}", e)),
        },
        None => Logger::console_only(),
    };

    let factory = ImgSplitCommandFactory::new();
    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            info!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("{} command failed: {}", command.name(), e);
                fail(&e.to_string());
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            fail(&e.to_string());
        }
    };
}
