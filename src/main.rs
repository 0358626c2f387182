use clap::Parser;

use whitespace_guard::cli::Cli;
use whitespace_guard::commands::run_check;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_check(&cli.scan_options()));
}
