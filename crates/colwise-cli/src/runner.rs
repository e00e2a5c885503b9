//! Local and remote command execution.
//!
//! Commands run through `sh -c`. Remote commands are wrapped in
//! `ssh -q -p <port>`, and file sets are distributed with `scp` after the
//! remote directories exist. A nonzero exit anywhere surfaces as an error
//! carrying the offending command text and exit code.

use std::path::PathBuf;
use std::process::{Child, Command};

use thiserror::Error;
use tracing::debug;

/// Errors from launching or awaiting external commands.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The command could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command that failed to start.
        command: String,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child process failed.
    #[error("failed to wait on `{command}`: {source}")]
    Wait {
        /// The command being awaited.
        command: String,
        /// The underlying wait failure.
        #[source]
        source: std::io::Error,
    },

    /// The command exited with a nonzero status.
    #[error("command failed with exit code {code}: {command}")]
    CommandFailed {
        /// The failing command text.
        command: String,
        /// The nonzero exit code.
        code: i32,
    },

    /// The command was terminated by a signal and has no exit code.
    #[error("command terminated without an exit code: {command}")]
    Terminated {
        /// The terminated command text.
        command: String,
    },
}

/// A specialized Result type for command execution.
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Runs commands locally or over SSH and distributes files with scp.
#[derive(Debug, Clone)]
pub struct CmdRunner {
    ssh_port: u16,
}

impl Default for CmdRunner {
    fn default() -> Self {
        Self::new(22)
    }
}

impl CmdRunner {
    /// Creates a runner using `ssh_port` for all remote operations.
    pub fn new(ssh_port: u16) -> Self {
        Self { ssh_port }
    }

    /// Spawns `command` under `sh -c` and returns the child handle.
    pub fn run(&self, command: &str) -> Result<Child> {
        debug!(command, "spawning command");
        Command::new("sh")
            .arg("-c")
            .arg(command)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                command: command.to_string(),
                source,
            })
    }

    /// Waits for `child` to finish; nonzero exit is a failure naming
    /// `command`.
    pub fn wait(&self, mut child: Child, command: &str) -> Result<()> {
        let status = child.wait().map_err(|source| RunnerError::Wait {
            command: command.to_string(),
            source,
        })?;
        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(RunnerError::CommandFailed {
                command: command.to_string(),
                code,
            }),
            None => Err(RunnerError::Terminated {
                command: command.to_string(),
            }),
        }
    }

    /// Runs a local command to completion.
    pub fn run_and_wait(&self, command: &str) -> Result<()> {
        let child = self.run(command)?;
        self.wait(child, command)
    }

    /// Builds the ssh invocation for `remote_command` on `host`.
    pub fn ssh_command(&self, host: &str, remote_command: &str) -> String {
        format!("ssh -q -p {} {} '{}'", self.ssh_port, host, remote_command)
    }

    /// Spawns a command on a remote host over SSH.
    pub fn run_ssh(&self, host: &str, remote_command: &str) -> Result<Child> {
        self.run(&self.ssh_command(host, remote_command))
    }

    /// Runs a remote command to completion.
    pub fn run_ssh_and_wait(&self, host: &str, remote_command: &str) -> Result<()> {
        let command = self.ssh_command(host, remote_command);
        self.run_and_wait(&command)
    }

    /// Copies `files` to every `(host, dir)` destination.
    ///
    /// All remote `mkdir -p` commands are launched before any is awaited,
    /// then one `scp` runs per destination. The first failure aborts with
    /// the offending command.
    pub fn dispatch_files(&self, files: &[PathBuf], destinations: &[(String, String)]) -> Result<()> {
        let mut pending = Vec::with_capacity(destinations.len());
        for (host, dir) in destinations {
            let command = self.ssh_command(host, &format!("mkdir -p {dir}"));
            let child = self.run(&command)?;
            pending.push((child, command));
        }
        for (child, command) in pending {
            self.wait(child, &command)?;
        }

        let file_list = files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        for (host, dir) in destinations {
            let command = format!("scp -q -P {} {} {}:{}/", self.ssh_port, file_list, host, dir);
            self.run_and_wait(&command)?;
        }
        Ok(())
    }
}
