//! Stemkit command-line entry point

use clap::Parser;
use stemkit_cli::commands::Commands;

/// Snowball-style stemming for twelve European languages
#[derive(Debug, Parser)]
#[command(name = "stemkit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
