//! LaMetric CLI binary entry point.

use clap::Parser;
use lametric::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login => commands::handle_login().await,
        Commands::Devices => commands::handle_devices().await,
        Commands::Notify(args) => commands::handle_notify(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
