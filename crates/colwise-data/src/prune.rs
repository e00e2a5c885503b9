//! Zero-row pruning and batch output.
//!
//! A transposed batch is written as a block: a header with the surviving row
//! count, the label row verbatim, then one sparse-encoded line per surviving
//! feature row. Feature rows whose every value is the zero literal are
//! pruned; the label row is never pruned, whatever it contains.

use std::io::Write;

use crate::codec::{encode_feature_row, write_label_row, ZERO};
use crate::error::Result;

/// Counters reported for one written batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Rows emitted, the label row included.
    pub rows_written: usize,
    /// All-zero feature rows removed.
    pub rows_pruned: usize,
}

/// Classifies a transposed batch and writes its output block.
///
/// Rows are processed in transposed order `i = 0, 1, 2, …` with a running
/// `dropped` count. Row 0 is the label row and is always kept. A feature row
/// is pruned iff every one of its values equals the zero literal; a kept row
/// is assigned feature id `i + dropped`, counting the rows dropped before
/// it. Dropped row indices are not reused, so an assigned id can exceed the
/// row's own transposed index.
///
/// An empty batch writes nothing. The label row makes that unreachable from
/// the driver, but the guard stays.
pub fn write_batch<W: Write>(w: &mut W, transposed: Vec<Vec<String>>) -> Result<BatchStats> {
    let mut rows = transposed.into_iter();
    let Some(labels) = rows.next() else {
        return Ok(BatchStats::default());
    };

    let mut dropped = 0usize;
    let mut surviving = Vec::new();
    for (offset, row) in rows.enumerate() {
        let index = offset + 1;
        if row.iter().all(|value| value == ZERO) {
            dropped += 1;
        } else {
            surviving.push((index + dropped, row));
        }
    }

    let rows_written = 1 + surviving.len();
    writeln!(w, "{rows_written}")?;
    write_label_row(w, &labels)?;
    for (feature_id, values) in &surviving {
        encode_feature_row(w, *feature_id, values)?;
    }

    Ok(BatchStats {
        rows_written,
        rows_pruned: dropped,
    })
}
