//! Batch padding and transposition.

use crate::codec::ZERO;

/// Pads every row to `target_width` with zero tokens, then transposes the
/// matrix: output row `k` holds the values at position `k` across all input
/// rows, for `k = 0..target_width`.
///
/// This is a pure function with no other side effects. Batched callers pass
/// the batch's local width; any caller with equal-length or raggedly padded
/// rows can use it as a generic transpose.
pub fn pad_and_transpose(rows: Vec<Vec<String>>, target_width: usize) -> Vec<Vec<String>> {
    let row_count = rows.len();
    let mut columns: Vec<Vec<String>> = (0..target_width)
        .map(|_| Vec::with_capacity(row_count))
        .collect();

    for row in rows {
        let mut values = row.into_iter();
        for column in columns.iter_mut() {
            column.push(values.next().unwrap_or_else(|| ZERO.to_string()));
        }
    }

    columns
}
