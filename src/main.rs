mod business_cmd;
mod cli;
mod config;
mod convert;
mod grid_cmd;
mod holidays_cmd;
mod logging;
mod range_cmd;
mod recur_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Grid(args) => grid_cmd::run(args, &config),
        Command::Holidays(args) => holidays_cmd::run(args, &config),
        Command::Business(args) => business_cmd::run(args, &config),
        Command::Recur(args) => recur_cmd::run(args, &config),
        Command::Range(args) => range_cmd::run(args),
    }
}
