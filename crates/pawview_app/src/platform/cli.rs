//! Command-line arguments for pawview

use std::path::PathBuf;

use clap::Parser;
use pawview_engine::DEFAULT_MAX_ATTEMPTS;

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "pawview",
    version,
    about = "Browse random dog and cat photos from the terminal"
)]
pub struct Cli {
    /// Accept the first image URL a provider returns, even animations and videos
    #[arg(long)]
    pub lenient: bool,

    /// Requests per photo before giving up on finding a displayable image
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Directory for preferences and the log file
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Point a provider at another endpoint (repeatable)
    #[arg(long = "endpoint", value_name = "NAME=URL")]
    pub endpoints: Vec<String>,
}
