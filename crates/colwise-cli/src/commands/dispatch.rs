//! Dispatch command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::runner::CmdRunner;

/// Copy a file set to remote hosts
///
/// Creates each destination directory over SSH, then copies the files with
/// scp, one transfer per destination. The first failing command aborts the
/// dispatch.
///
/// # Example
///
/// ```bash
/// colwise dispatch --file trainer --file trainer.conf \
///     --dest worker1:/tmp/job --dest worker2:/tmp/job
/// ```
#[derive(Args, Debug, Clone)]
pub struct DispatchCommand {
    /// File to copy; repeat for each file
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Destination as `host:dir`; repeat for each host
    #[arg(long = "dest", required = true, value_parser = parse_destination)]
    pub destinations: Vec<(String, String)>,

    /// SSH port used for both ssh and scp
    #[arg(long, default_value_t = 22)]
    pub ssh_port: u16,
}

fn parse_destination(raw: &str) -> Result<(String, String), String> {
    raw.split_once(':')
        .map(|(host, dir)| (host.to_string(), dir.to_string()))
        .filter(|(host, dir)| !host.is_empty() && !dir.is_empty())
        .ok_or_else(|| format!("expected host:dir, got `{raw}`"))
}

impl DispatchCommand {
    /// Copies the files to every destination.
    pub fn run(&self) -> Result<()> {
        info!(
            files = self.files.len(),
            destinations = self.destinations.len(),
            "dispatching files"
        );
        CmdRunner::new(self.ssh_port).dispatch_files(&self.files, &self.destinations)?;
        Ok(())
    }
}
