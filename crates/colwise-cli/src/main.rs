//! Colwise CLI - feature-major re-encoding for sparse training data.
//!
//! This binary converts instance-major sparse records into feature-major
//! form, renders trainer hyperparameters as command-line flags, and stages
//! files on remote training hosts.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use colwise_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("colwise=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transpose(cmd) => cmd.run()?,
        Commands::Launch(cmd) => cmd.run()?,
        Commands::Dispatch(cmd) => cmd.run()?,
    }

    Ok(())
}
