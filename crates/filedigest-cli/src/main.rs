//! filedigest: CLI for validated SHA-256 file digests

use clap::Parser;
use filedigest_cli::commands;
use filedigest_cli::logging::setup_logging;
use filedigest_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let platform = commands::platform::build_platform(&cli.content_roots, !cli.no_native)?;

    match cli.command {
        Commands::Hash {
            references,
            recursive,
            json,
            chunk_size,
        } => {
            let args = commands::hash::HashArgs {
                references,
                recursive,
                json,
                chunk_size,
                emit_logs: !cli.quiet,
            };
            commands::hash::run(&args, &platform).await?;
        }
        Commands::Check {
            reference,
            expected,
        } => {
            commands::check::run(&reference, &expected, &platform, !cli.quiet).await?;
        }
    }

    Ok(())
}
