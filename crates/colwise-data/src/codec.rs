//! Sparse line encoding and decoding.
//!
//! Input records are instance-major: one line per instance, a label token
//! followed by `index:value` pairs with ascending indices starting at 1.
//! Output feature rows are feature-major: a feature id followed by
//! `position:value` pairs over the batch's instance positions, starting
//! at 0.
//!
//! # Example
//!
//! ```
//! use colwise_data::codec::parse_line;
//!
//! let row = parse_line("1 1:5 3:2").unwrap();
//! assert_eq!(row.label, "1");
//! assert_eq!(row.entries, vec![(1, "5".to_string()), (3, "2".to_string())]);
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// The token treated as zero throughout the converter.
///
/// The test is literal string equality; `"0.0"` is not zero.
pub const ZERO: &str = "0";

/// A single instance-major record: a label and its sparse feature entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseRow {
    /// The label token, kept as an opaque string.
    pub label: String,
    /// `(index, value)` pairs in input order. Indices are expected to be
    /// ascending and >= 1; values are opaque tokens.
    pub entries: Vec<(usize, String)>,
}

/// Parses one input line into a [`SparseRow`].
///
/// The line is split on whitespace; token 0 is the label, every remaining
/// token must have the form `index:value`.
///
/// # Errors
///
/// [`ConvertError::EmptyLine`] if the line has no tokens,
/// [`ConvertError::MalformedToken`] if a token lacks a `:`, and
/// [`ConvertError::InvalidIndex`] if an index is not an integer.
pub fn parse_line(line: &str) -> Result<SparseRow> {
    let mut tokens = line.split_whitespace();
    let label = tokens.next().ok_or(ConvertError::EmptyLine)?.to_string();

    let mut entries = Vec::new();
    for token in tokens {
        let (index, value) = token
            .split_once(':')
            .ok_or_else(|| ConvertError::MalformedToken(token.to_string()))?;
        let index = index.parse().map_err(|source| ConvertError::InvalidIndex {
            token: token.to_string(),
            source,
        })?;
        entries.push((index, value.to_string()));
    }

    Ok(SparseRow { label, entries })
}

/// Re-encodes one surviving feature row in sparse form.
///
/// Writes `feature_id`, then `position:value` for every value that is not
/// the zero literal; zero-valued positions are omitted. Every written token
/// carries a trailing space, then the line ends with a newline. An all-zero
/// row yields only the id and its separator, but such rows are pruned before
/// they reach the encoder.
pub fn encode_feature_row<W: Write>(w: &mut W, feature_id: usize, values: &[String]) -> io::Result<()> {
    write!(w, "{feature_id} ")?;
    for (position, value) in values.iter().enumerate() {
        if value != ZERO {
            write!(w, "{position}:{value} ")?;
        }
    }
    writeln!(w)
}

/// Writes a batch's label row: labels joined by single spaces, no trailing
/// space, emitted dense and verbatim.
pub fn write_label_row<W: Write>(w: &mut W, labels: &[String]) -> io::Result<()> {
    writeln!(w, "{}", labels.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_line_basic() {
        let row = parse_line("1 1:5 3:2").unwrap();
        assert_eq!(row.label, "1");
        assert_eq!(row.entries, vec![(1, "5".to_string()), (3, "2".to_string())]);
    }

    #[test]
    fn test_parse_line_label_only() {
        let row = parse_line("0").unwrap();
        assert_eq!(row.label, "0");
        assert!(row.entries.is_empty());
    }

    #[test]
    fn test_parse_line_keeps_label_opaque() {
        let row = parse_line("+1 2:0.5").unwrap();
        assert_eq!(row.label, "+1");
        assert_eq!(row.entries, vec![(2, "0.5".to_string())]);
    }

    #[test]
    fn test_parse_line_missing_separator() {
        let err = parse_line("1 5").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedToken(t) if t == "5"));
    }

    #[test]
    fn test_parse_line_bad_index() {
        let err = parse_line("1 x:5").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidIndex { token, .. } if token == "x:5"));
    }

    #[test]
    fn test_parse_line_empty() {
        assert!(matches!(parse_line("   "), Err(ConvertError::EmptyLine)));
    }

    #[test]
    fn test_encode_feature_row_skips_zeros() {
        let mut out = Vec::new();
        encode_feature_row(&mut out, 2, &strings(&["0", "7", "0", "3"])).unwrap();
        assert_eq!(out, b"2 1:7 3:3 \n");
    }

    #[test]
    fn test_encode_feature_row_zero_test_is_literal() {
        // "0.0" is not the zero literal and must survive.
        let mut out = Vec::new();
        encode_feature_row(&mut out, 1, &strings(&["0.0", "0"])).unwrap();
        assert_eq!(out, b"1 0:0.0 \n");
    }

    #[test]
    fn test_encode_feature_row_all_zero() {
        let mut out = Vec::new();
        encode_feature_row(&mut out, 5, &strings(&["0", "0"])).unwrap();
        assert_eq!(out, b"5 \n");
    }

    #[test]
    fn test_write_label_row_no_trailing_space() {
        let mut out = Vec::new();
        write_label_row(&mut out, &strings(&["1", "0", "1"])).unwrap();
        assert_eq!(out, b"1 0 1\n");
    }
}
