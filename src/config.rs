use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_EPISODES: u64 = 100_000;
pub const DEFAULT_OUTPUT: &str = "policy.json";

/// Trains a blackjack hit/stay policy with Monte Carlo control.
#[derive(Clone, Debug, Parser)]
#[command(author, about, long_about = None)]
pub struct Config {
    /// Number of training episodes
    #[arg(short, long, default_value_t = DEFAULT_EPISODES)]
    pub episodes: u64,

    /// Where the learned table is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for the deck shuffles; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Continue training from a previously saved table
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Games to play with the learned policy and a stick-at-20 policy after training
    #[arg(long, default_value_t = 0)]
    pub evaluate: u64,

    /// Print the learned policy as a table
    #[arg(long)]
    pub print_policy: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
