//! haulmatch - trailer matching and freight quoting for oversize loads
//!
//! Walks a load through the quoting wizard from the command line:
//! dimensions, trailer match, route, then a priced quote or invoice.

mod cli;
mod commands;
mod logger;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
