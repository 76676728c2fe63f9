//! Logging initialization for the pawview terminal app.
//!
//! The terminal is the UI, so logs default to `pawview.log` in the state
//! directory instead of the screen.

use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use pawview_engine::ensure_state_dir;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "pawview.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to pawview.log in the state directory.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Discard log output.
    Off,
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination, verbose: bool, state_dir: &Path) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Off => return,
        LogDestination::File => match create_file_logger(level, config, state_dir) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![term_logger(level, config)],
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> =
                vec![term_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config, state_dir) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    state_dir: &Path,
) -> Option<Box<WriteLogger<File>>> {
    if let Err(err) = ensure_state_dir(state_dir) {
        eprintln!("Warning: Could not prepare {:?} for logging: {}", state_dir, err);
        return None;
    }
    let log_path = state_dir.join(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
