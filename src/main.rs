use std::{process, str::FromStr};

use casegraph::Config;
use clap::Parser;
use log::{LevelFilter, error, info};

fn main() {
    // Parse configuration first
    let cfg = Config::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&cfg.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'info' instead.",
            cfg.log_level
        );
        LevelFilter::Info
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!("Starting casegraph with log level: {}", log_level);

    // Run the application
    if let Err(err) = casegraph::run(&cfg) {
        error!(err:err; "Run failed");
        process::exit(1);
    }

    info!("Completed successfully");
}
