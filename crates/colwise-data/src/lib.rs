//! Feature-major re-encoding for sparse training data.
//!
//! This crate converts instance-major sparse training records (one line per
//! instance: a label followed by ascending `index:value` pairs, as consumed
//! by sparse linear and factorization-machine trainers) into feature-major
//! records, the layout needed for out-of-core or feature-parallel training.
//!
//! The conversion is batched: a fixed number of instances is read, expanded
//! into dense positional rows, padded to the batch's own maximum width,
//! transposed so rows become feature slots, pruned of all-zero slots, and
//! re-encoded sparsely. After the last batch the largest dense width seen
//! anywhere in the run is appended as the file's final line. Memory is
//! bounded by one batch, never by the input size.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use colwise_data::{convert, ConvertOptions};
//!
//! let input = b"1 1:5 3:2\n0 2:7\n";
//! let mut output = Vec::new();
//! let summary = convert(
//!     &mut Cursor::new(&input[..]),
//!     &mut output,
//!     &ConvertOptions { batch_size: 2 },
//! )
//! .expect("well-formed input");
//!
//! assert_eq!(summary.global_max_width, 4);
//! ```
//!
//! # Modules
//!
//! - [`codec`] - sparse line parsing and re-encoding
//! - [`expand`] - dense expansion with gap filling
//! - [`transpose`] - batch-local padding and transposition
//! - [`prune`] - zero-row pruning and batch output
//! - [`driver`] - the batch loop and file-level entry points

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod driver;
pub mod error;
pub mod expand;
pub mod prune;
pub mod transpose;

// Re-export main types for convenience
pub use codec::{encode_feature_row, parse_line, write_label_row, SparseRow, ZERO};
pub use driver::{convert, convert_files, ConvertOptions, ConvertSummary, DEFAULT_BATCH_SIZE};
pub use error::{ConvertError, Result};
pub use expand::expand_row;
pub use prune::{write_batch, BatchStats};
pub use transpose::pad_and_transpose;
