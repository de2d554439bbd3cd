// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `DictionaryEntry` text format: `key ":" value`, one per line. If the key
//! itself contains `:` (as URL schemes do), the line is split on the LAST
//! colon only, so the key survives intact.

use crate::types::DictionaryEntry;

pub fn encode_dictionary_entry(entry: &DictionaryEntry) -> String {
    format!("{}:{}", entry.key, entry.value)
}

/// Decode a `key:value` line. A line with no colon at all yields a key and
/// value that are both the whole line, matching the reference behavior of
/// splitting on an absent separator.
pub fn decode_dictionary_entry(line: &str) -> DictionaryEntry {
    match line.rfind(':') {
        Some(idx) => DictionaryEntry::new(&line[..idx], &line[idx + 1..]),
        None => DictionaryEntry::new(line, line),
    }
}
