//! Transpose command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use colwise_data::{convert_files, ConvertOptions, DEFAULT_BATCH_SIZE};

/// Convert an instance-major sparse data file into feature-major form
///
/// Reads `label index:value ...` lines, re-encodes them column-wise in
/// fixed-size batches, and appends the global maximum dense row width as
/// the output's final line.
///
/// # Example
///
/// ```bash
/// colwise transpose --input train.txt --output train.colmajor.txt --batch-size 200
/// ```
#[derive(Args, Debug, Clone)]
pub struct TransposeCommand {
    /// Path to the instance-major input file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Path for the feature-major output file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of instances per batch; each batch is padded to its own width
    #[arg(long, short = 'b', default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl TransposeCommand {
    /// Runs the conversion.
    pub fn run(&self) -> Result<()> {
        let options = ConvertOptions {
            batch_size: self.batch_size,
        };
        convert_files(&self.input, &self.output, &options)
            .with_context(|| format!("failed to convert {}", self.input.display()))?;
        Ok(())
    }
}
