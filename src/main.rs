//! CLI entry point for validating maze maps and querying movement

use clap::Parser;
use wallmaze::io::cli::{Cli, MapChecker};
use wallmaze::io::configuration::DEFAULT_LOG_LEVEL;

fn main() -> wallmaze::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut checker = MapChecker::new(cli);
    checker.process(&mut std::io::stdout().lock())
}
