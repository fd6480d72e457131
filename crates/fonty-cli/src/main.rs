//! fonty - Main Entry Point

use anyhow::Result;
use clap::Parser;
use fonty_cli::{Cli, Commands, commands};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the JSON
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Adapt(args) => {
            commands::adapt(&args)?;
        }
        Commands::Url(args) => {
            println!("{}", commands::url(&args)?);
        }
    }
    Ok(())
}
