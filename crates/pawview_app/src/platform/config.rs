use std::path::PathBuf;
use std::time::Duration;

use pawview_engine::{
    EngineConfig, FetchSettings, ProviderRegistry, RegistryError, ValidationPolicy,
};
use thiserror::Error;

use super::cli::Cli;
use super::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("endpoint override {0:?} is not NAME=URL")]
    MalformedEndpoint(String),
    #[error(transparent)]
    UnknownProvider(#[from] RegistryError),
    #[error("no config directory available; pass --state-dir")]
    NoStateDir,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub state_dir: PathBuf,
    pub log: LogDestination,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let policy = if cli.lenient {
            ValidationPolicy::Lenient
        } else {
            ValidationPolicy::Strict {
                max_attempts: cli.max_attempts,
            }
        };

        let fetch = FetchSettings {
            request_timeout: Duration::from_secs(cli.timeout_secs),
            ..FetchSettings::default()
        };

        let mut registry = ProviderRegistry::default();
        for raw in &cli.endpoints {
            let (name, url) = raw
                .split_once('=')
                .filter(|(name, url)| !name.trim().is_empty() && !url.trim().is_empty())
                .ok_or_else(|| ConfigError::MalformedEndpoint(raw.clone()))?;
            registry = registry.with_endpoint(name.trim(), url.trim())?;
        }

        let state_dir = match cli.state_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or(ConfigError::NoStateDir)?
                .join("pawview"),
        };

        Ok(Self {
            engine: EngineConfig {
                fetch,
                policy,
                registry,
            },
            state_dir,
            log: cli.log,
            verbose: cli.verbose,
        })
    }
}
