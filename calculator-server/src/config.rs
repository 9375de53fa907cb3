use anyhow::{bail, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::LevelFilter;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use thiserror::Error;

/// Serves arithmetic expression evaluation over HTTP
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Port to listen on
    #[clap(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Version segment of the API path, as in /api/{version}/calculate
    #[clap(long, env = "API_VERSION", default_value = "v1")]
    pub api_version: String,

    /// Version of the application reported in the logs
    #[clap(long, env = "APP_VERSION", default_value = "v1.0.0")]
    pub app_version: String,

    /// Name of the application reported in the logs
    #[clap(long, env = "APP_NAME", default_value = "Calculate")]
    pub app_name: String,

    /// Either `development` or `production`
    #[clap(long, env = "APP_MODE", default_value_t = Mode::Production)]
    pub mode: Mode,

    /// Log level; overrides -v/-q when given
    #[clap(long, env = "LOG_LEVEL")]
    pub log_level: Option<LevelFilter>,

    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Rejects values that parse but cannot be served with.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("invalid PORT value: {}", self.port);
        }
        if self.api_version.is_empty() || self.api_version.contains('/') {
            bail!("invalid API_VERSION value: {:?}", self.api_version);
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level
            .unwrap_or_else(|| self.verbose.log_level_filter())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

#[derive(Error, Debug)]
#[error("invalid APP_MODE value: {0}")]
pub struct InvalidMode(String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(input: &str) -> Result<Mode, Self::Err> {
        match input {
            "development" => Ok(Mode::Development),
            "production" => Ok(Mode::Production),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}
