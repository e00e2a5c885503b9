//! Colwise CLI library.
//!
//! This crate provides the command-line interface for the colwise data
//! toolchain:
//!
//! - **Transpose**: convert instance-major sparse records to feature-major
//!   form
//! - **Launch**: render hyperparameter flags from a config section and run
//!   the external trainer, locally or over SSH
//! - **Dispatch**: copy file sets to remote hosts
//!
//! # Example
//!
//! ```bash
//! # Convert a data file
//! colwise transpose --input train.txt --output train.colmajor.txt
//!
//! # Run the trainer with flags from trainer.conf
//! colwise launch --config trainer.conf --trainer ./fm_train
//!
//! # Stage files on the workers
//! colwise dispatch --file ./fm_train --dest worker1:/tmp/job
//! ```

pub mod commands;
pub mod conf;
pub mod flags;
pub mod runner;

use clap::{Parser, Subcommand};

pub use commands::{DispatchCommand, LaunchCommand, TransposeCommand};

/// Colwise - feature-major re-encoding for sparse training data
///
/// Converts instance-major sparse records into feature-major form and
/// drives the external trainer that consumes them.
#[derive(Parser, Debug)]
#[command(name = "colwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert instance-major sparse records to feature-major form
    Transpose(TransposeCommand),

    /// Render hyperparameter flags and run the trainer
    Launch(LaunchCommand),

    /// Copy file sets to remote hosts
    Dispatch(DispatchCommand),
}
