use clap::Parser;

use linetally::cli::Cli;
use linetally::commands::run_count;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_count(&cli));
}
