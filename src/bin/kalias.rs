// src/bin/kalias.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use kalias::cli::{Cli, handlers};

/// The main entry point of `kalias`.
/// It sets up logging, parses arguments, runs the generator and performs
/// centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("{}: {:#}", kalias::t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    handlers::generate::handle(&cli)
}
