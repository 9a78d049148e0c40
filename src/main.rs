mod blackjack;
mod config;
mod logging;
mod persist;
mod solver;
mod telemetry;

use clap::Parser;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.log_level, config.log_file.as_deref())?;
    blackjack::run(&config)
}
