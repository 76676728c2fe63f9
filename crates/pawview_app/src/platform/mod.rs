//! Terminal front end: wiring between stdin, the core state machine and the
//! engine.
mod app;
pub(crate) mod cli;
mod config;
mod effects;
pub(crate) mod logging;
mod persistence;
mod ui;

pub(crate) fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::AppConfig::from_cli(cli)?;
    logging::initialize(config.log, config.verbose, &config.state_dir);
    app::run_app(config)
}
