//! Hyperparameter-to-flag translation.
//!
//! The external trainer takes its hyperparameters as `--name=value` flags.
//! This module renders a config section into that form.

use crate::conf::Section;

/// Renders a config section as ordered `--name=value` flags.
///
/// Entries keep their section order. Values are lower-cased, except when
/// the key contains the substring `file`, which marks a path that must pass
/// through untouched.
pub fn render_flags(section: &Section) -> Vec<String> {
    section
        .entries
        .iter()
        .map(|(key, value)| {
            if key.contains("file") {
                format!("--{key}={value}")
            } else {
                format!("--{key}={}", value.to_lowercase())
            }
        })
        .collect()
}

/// Appends rendered flags to a trainer command line.
pub fn command_with_flags(trainer: &str, flags: &[String]) -> String {
    let mut command = trainer.to_string();
    for flag in flags {
        command.push(' ');
        command.push_str(flag);
    }
    command
}
