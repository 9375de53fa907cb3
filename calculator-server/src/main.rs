use anyhow::{Context, Result};
use calculator_server::config::{Config, Mode};
use calculator_server::server;
use clap::Parser;
use log::{debug, info, LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    config
        .validate()
        .context("error initializing app")?;

    init_logger(config.log_level_filter());

    if config.mode == Mode::Development {
        debug!("Dev mode, config: {:?}", config);
    }
    info!(
        "App initialized, mode: {}, log level: {}",
        config.mode,
        config.log_level_filter()
    );

    server::run(&config).await.context("failed to run app")
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
