//! The batch conversion driver.
//!
//! Reads fixed-size batches of instance-major lines, runs each batch
//! through expansion, padding + transposition, and pruning, writes the
//! feature-major blocks, and finishes with the global maximum dense width
//! as the file's last line.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use colwise_data::{convert, ConvertOptions};
//!
//! let input = b"1 1:5 3:2\n0 2:7\n";
//! let mut output = Vec::new();
//! let options = ConvertOptions { batch_size: 2 };
//! let summary = convert(&mut Cursor::new(&input[..]), &mut output, &options).unwrap();
//!
//! assert_eq!(summary.global_max_width, 4);
//! assert_eq!(output, b"4\n1 0\n1 0:5 \n2 1:7 \n3 0:2 \n4\n");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::codec::parse_line;
use crate::error::{ConvertError, Result};
use crate::expand::expand_row;
use crate::prune::write_batch;
use crate::transpose::pad_and_transpose;

/// The batch size used when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Number of instances read per batch. Each batch is padded to its own
    /// local width, independent of the others. Must be at least 1.
    pub batch_size: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Counters describing a completed conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSummary {
    /// Batches written.
    pub batches: usize,
    /// Instances read.
    pub instances: usize,
    /// All-zero feature rows pruned, summed over batches.
    pub rows_pruned: usize,
    /// The largest dense row width seen over the whole run; also the value
    /// of the output's final line.
    pub global_max_width: usize,
}

/// Converts an instance-major stream into feature-major batch blocks.
///
/// Reads up to `options.batch_size` lines at a time and fully materializes
/// only the current batch, so memory is bounded by `batch_size` times the
/// batch's local width, not by the input size. After the last batch the
/// global maximum width is written as the final line and the writer is
/// flushed.
///
/// # Errors
///
/// The first malformed line or I/O failure aborts the run; the in-flight
/// batch is discarded and no footer is written.
pub fn convert<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    if options.batch_size == 0 {
        return Err(ConvertError::InvalidBatchSize);
    }

    let mut summary = ConvertSummary::default();
    let mut global_max_width = 0usize;
    let mut line = String::new();

    loop {
        // READING: up to batch_size raw lines.
        let mut batch = Vec::with_capacity(options.batch_size);
        while batch.len() < options.batch_size {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            batch.push(line.clone());
        }
        if batch.is_empty() {
            break;
        }
        let instances = batch.len();

        // PROCESSING: decode, expand, pad to the batch-local width,
        // transpose.
        let rows = batch
            .iter()
            .map(|line| parse_line(line))
            .collect::<Result<Vec<_>>>()?;
        let dense: Vec<Vec<String>> = rows.iter().map(expand_row).collect();
        let local_width = dense.iter().map(Vec::len).max().unwrap_or(0);
        let transposed = pad_and_transpose(dense, local_width);

        // WRITING.
        let stats = write_batch(writer, transposed)?;
        global_max_width = global_max_width.max(local_width);

        summary.batches += 1;
        summary.instances += instances;
        summary.rows_pruned += stats.rows_pruned;
        debug!(
            batch = summary.batches,
            instances,
            local_width,
            pruned = stats.rows_pruned,
            "batch written"
        );
    }

    writeln!(writer, "{global_max_width}")?;
    writer.flush()?;

    summary.global_max_width = global_max_width;
    Ok(summary)
}

/// Converts `input` to `output` through buffered file handles.
///
/// Each file is opened once; both handles are released on every exit path
/// when the guards drop.
pub fn convert_files(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    let mut reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let summary = convert(&mut reader, &mut writer, options)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        batches = summary.batches,
        instances = summary.instances,
        rows_pruned = summary.rows_pruned,
        global_max_width = summary.global_max_width,
        "conversion complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, batch_size: usize) -> (Vec<u8>, ConvertSummary) {
        let mut output = Vec::new();
        let summary = convert(
            &mut Cursor::new(input.as_bytes()),
            &mut output,
            &ConvertOptions { batch_size },
        )
        .unwrap();
        (output, summary)
    }

    #[test]
    fn test_convert_single_batch() {
        let (output, summary) = run("1 1:5 3:2\n0 2:7\n", 2);
        assert_eq!(output, b"4\n1 0\n1 0:5 \n2 1:7 \n3 0:2 \n4\n");
        assert_eq!(summary.batches, 1);
        assert_eq!(summary.instances, 2);
        assert_eq!(summary.rows_pruned, 0);
        assert_eq!(summary.global_max_width, 4);
    }

    #[test]
    fn test_convert_batches_are_independent() {
        // batch_size 1: each instance is its own batch with its own width.
        let (output, summary) = run("1 1:5 3:2\n0 2:7\n", 1);
        assert_eq!(
            output,
            b"3\n1\n1 0:5 \n4 0:2 \n2\n0\n3 0:7 \n4\n".as_slice()
        );
        assert_eq!(summary.batches, 2);
        assert_eq!(summary.instances, 2);
        assert_eq!(summary.rows_pruned, 2);
        assert_eq!(summary.global_max_width, 4);
    }

    #[test]
    fn test_convert_empty_input_writes_footer_only() {
        let (output, summary) = run("", 10);
        assert_eq!(output, b"0\n");
        assert_eq!(summary, ConvertSummary::default());
    }

    #[test]
    fn test_convert_missing_trailing_newline() {
        let (output, _) = run("1 1:5 3:2\n0 2:7", 2);
        assert_eq!(output, b"4\n1 0\n1 0:5 \n2 1:7 \n3 0:2 \n4\n");
    }

    #[test]
    fn test_convert_footer_is_max_over_batches() {
        let (output, summary) = run("1 1:9\n0 4:2\n1 2:3\n", 1);
        assert_eq!(summary.global_max_width, 5);
        assert!(output.ends_with(b"5\n"));
        let footers = output
            .split(|&b| b == b'\n')
            .filter(|line| *line == b"5")
            .count();
        assert_eq!(footers, 1);
    }

    #[test]
    fn test_convert_malformed_line_aborts() {
        let mut output = Vec::new();
        let err = convert(
            &mut Cursor::new(&b"1 1:5\n0 oops\n"[..]),
            &mut output,
            &ConvertOptions { batch_size: 10 },
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MalformedToken(t) if t == "oops"));
    }

    #[test]
    fn test_convert_rejects_zero_batch_size() {
        let mut output = Vec::new();
        let err = convert(
            &mut Cursor::new(&b"1 1:5\n"[..]),
            &mut output,
            &ConvertOptions { batch_size: 0 },
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidBatchSize));
        assert!(output.is_empty());
    }

    #[test]
    fn test_convert_is_deterministic() {
        let input = "1 1:5 3:2\n0 2:7\n1 6:1\n";
        let (first, _) = run(input, 2);
        let (second, _) = run(input, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_options() {
        assert_eq!(ConvertOptions::default().batch_size, DEFAULT_BATCH_SIZE);
    }
}
