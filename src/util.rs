// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic binary search over a sorted, fixed-width-entry byte range.
//!
//! An earlier approach to the reverse index located postings by
//! binary-searching a sorted on-disk run directly rather than keeping an
//! in-memory lexicon. The lexicon approach in [`crate::reverse_index`] made
//! this unnecessary for lookups, but the helper is kept as a general utility
//! over any sorted, fixed-entry-size file range.

use crate::error::{IndexerError, Result};

/// Binary-search `data[range]`, treating it as a sequence of `entry_size`-byte
/// entries compared with `cmp`. `cmp` must return `Ordering::Less` when the
/// entry at a given offset sorts before `target`, `Greater` when after, and
/// `Equal` on a match.
///
/// Returns `(found, entry, offset)`: `entry` is `Some` only when `found` is
/// true; `offset` is always the would-be insertion point, the first byte
/// offset, relative to `data`, at or after which `target` belongs.
///
/// # Errors
///
/// Returns [`IndexerError::Value`] if `range` is not aligned to a multiple of
/// `entry_size`, or the end of `range` is out of bounds.
pub fn binary_search_entries<F>(
    data: &[u8],
    entry_size: usize,
    range: std::ops::Range<usize>,
    mut cmp: F,
) -> Result<(bool, Option<Vec<u8>>, usize)>
where
    F: FnMut(&[u8]) -> std::cmp::Ordering,
{
    if entry_size == 0 || (range.end - range.start) % entry_size != 0 {
        return Err(IndexerError::Value(format!(
            "binary-search range {:?} is not a multiple of entry size {entry_size}",
            range
        )));
    }
    if range.end > data.len() {
        return Err(IndexerError::Value(format!(
            "binary-search range {:?} exceeds buffer length {}",
            range,
            data.len()
        )));
    }

    let mut lo = (range.start - range.start % entry_size) / entry_size;
    let mut hi = range.end / entry_size;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let offset = mid * entry_size;
        let entry = &data[offset..offset + entry_size];
        match cmp(entry) {
            std::cmp::Ordering::Equal => return Ok((true, Some(entry.to_vec()), offset)),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }

    Ok((false, None, lo * entry_size))
}
