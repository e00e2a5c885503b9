//! Dense expansion of sparse rows.
//!
//! A sparse row names only its nonzero positions. Expansion materializes a
//! positional row with the label at position 0 and the zero literal filling
//! every skipped position.

use crate::codec::{SparseRow, ZERO};

/// Expands a sparse row into a dense positional row.
///
/// The result starts as `[label]` and grows entry by entry. For each
/// `(index, value)` pair the distance to the last placed index decides the
/// action: a gap is filled with zero tokens before appending the value, an
/// adjacent index appends directly, and a non-advancing index overwrites
/// `result[index]` in place without growing the row or moving the running
/// index. The overwrite is unguarded: an out-of-range index on input that
/// violates the ascending contract panics.
///
/// The width of the dense row is `max index present + 1`; positions never
/// referenced stay the zero literal.
pub fn expand_row(row: &SparseRow) -> Vec<String> {
    let mut last_index = 0usize;
    let mut result = Vec::with_capacity(row.entries.len() + 1);
    result.push(row.label.clone());

    for (index, value) in &row.entries {
        let distance = *index as i64 - last_index as i64;
        if distance > 1 {
            for _ in 0..distance - 1 {
                result.push(ZERO.to_string());
            }
            result.push(value.clone());
            last_index = *index;
        } else if distance == 1 {
            result.push(value.clone());
            last_index = *index;
        } else {
            // Non-advancing index: overwrite in place, last_index stays.
            result[*index] = value.clone();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, entries: &[(usize, &str)]) -> SparseRow {
        SparseRow {
            label: label.to_string(),
            entries: entries
                .iter()
                .map(|(i, v)| (*i, v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_expand_fills_gaps() {
        let dense = expand_row(&row("1", &[(1, "5"), (3, "2")]));
        assert_eq!(dense, vec!["1", "5", "0", "2"]);
    }

    #[test]
    fn test_expand_leading_gap() {
        let dense = expand_row(&row("0", &[(2, "7")]));
        assert_eq!(dense, vec!["0", "0", "7"]);
    }

    #[test]
    fn test_expand_consecutive_indices() {
        let dense = expand_row(&row("1", &[(1, "a"), (2, "b"), (3, "c")]));
        assert_eq!(dense, vec!["1", "a", "b", "c"]);
    }

    #[test]
    fn test_expand_label_only() {
        let dense = expand_row(&row("-1", &[]));
        assert_eq!(dense, vec!["-1"]);
    }

    #[test]
    fn test_expand_duplicate_index_overwrites_in_place() {
        // A repeated index rewrites the slot without growing the row, and the
        // running index does not move, so the next entry still measures its
        // distance from the first occurrence.
        let dense = expand_row(&row("1", &[(1, "5"), (1, "9"), (2, "7")]));
        assert_eq!(dense, vec!["1", "9", "7"]);
    }

    #[test]
    fn test_expand_label_position_preserved() {
        let dense = expand_row(&row("+1", &[(4, "w")]));
        assert_eq!(dense[0], "+1");
        assert_eq!(dense.len(), 5);
    }
}
