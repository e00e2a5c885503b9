//! Launch command implementation.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use tracing::info;

use crate::conf::ConfFile;
use crate::flags::{command_with_flags, render_flags};
use crate::runner::CmdRunner;

/// Render hyperparameter flags from a config section and run the trainer
///
/// Reads the named section of the config file, renders each entry as a
/// `--name=value` flag (values lower-cased unless the key names a file),
/// appends the flags to the trainer command, and runs it locally or on a
/// remote host over SSH. A nonzero exit aborts with the failing command.
#[derive(Args, Debug, Clone)]
pub struct LaunchCommand {
    /// Path to the config file
    #[arg(long, short = 'c', env = "COLWISE_CONFIG")]
    pub config: PathBuf,

    /// Config section holding the trainer hyperparameters
    #[arg(long, default_value = "hyperparameter")]
    pub section: String,

    /// Trainer command the flags are appended to
    #[arg(long)]
    pub trainer: String,

    /// Remote host (`user@host`); when absent the trainer runs locally
    #[arg(long)]
    pub host: Option<String>,

    /// SSH port for remote execution
    #[arg(long, default_value_t = 22)]
    pub ssh_port: u16,
}

impl LaunchCommand {
    /// Builds the trainer command line from the config section.
    pub fn build_command(&self) -> Result<String> {
        let conf = ConfFile::read(&self.config)
            .with_context(|| format!("failed to read config {}", self.config.display()))?;
        let section = conf.section(&self.section).ok_or_else(|| {
            anyhow!(
                "section `{}` not found in {}",
                self.section,
                self.config.display()
            )
        })?;
        Ok(command_with_flags(&self.trainer, &render_flags(section)))
    }

    /// Renders the flags and runs the trainer to completion.
    pub fn run(&self) -> Result<()> {
        let command = self.build_command()?;
        info!(command = %command, host = ?self.host, "launching trainer");

        let runner = CmdRunner::new(self.ssh_port);
        match &self.host {
            Some(host) => runner.run_ssh_and_wait(host, &command)?,
            None => runner.run_and_wait(&command)?,
        }
        Ok(())
    }
}
