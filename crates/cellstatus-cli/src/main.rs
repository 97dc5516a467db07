//! cellstatus - cellular module status report for SD-WAN edge devices.
//!
//! Queries the controller for every cellular module in the requested site
//! scope and writes one flattened CSV row per module.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use env_logger::Env;

use cli::Cli;
use error::exit_codes;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match commands::run_report(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
