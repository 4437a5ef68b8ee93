use bylines::cli::{self, Config};
use bylines::clock::SystemClock;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = cli::run(config, &SystemClock).await {
        cli::die(1, &err.to_string());
    }
}
