use clap::Parser;
use colored::Colorize;
use std::process;
use tracing::Level;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr) // keep stdout for reports
        .init();

    if let Err(e) = cli::execute(cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}
