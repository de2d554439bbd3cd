// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scans a [`PageDocument`]'s sections into word-id → hit-list pairs.
//!
//! Scanning rule: each section is split on ASCII space; each resulting token
//! becomes a [`Hit`] at its split-index position once it normalizes to a
//! word id. Splitting preserves empty tokens the way `" a".split(' ')` does
//! (`["", "a"]`) so that position indices for later tokens in the section
//! line up correctly. An empty token just never normalizes to a word id, so
//! it never contributes a hit, but it still consumes a position slot.

use std::collections::BTreeMap;

use crate::dictionary::WordDictionary;
use crate::types::{Hit, HitKind, PageDocument, WordId};

fn scan_into(
    text: &str,
    kind: HitKind,
    section_index: u32,
    dict: &mut WordDictionary,
    hits: &mut BTreeMap<WordId, Vec<Hit>>,
) {
    for (position, token) in text.split(' ').enumerate() {
        if let Some(word_id) = dict.get_word_id(token) {
            hits.entry(word_id)
                .or_default()
                .push(Hit::new(kind, section_index, position as u32));
        }
    }
}

/// Scan every section of `doc`, registering new words with `dict` along the
/// way, and return the merged word-id → hit-list map for a
/// [`crate::types::ForwardIndexEntry`].
pub fn scan_sections(doc: &PageDocument, dict: &mut WordDictionary) -> BTreeMap<WordId, Vec<Hit>> {
    let mut hits = BTreeMap::new();

    scan_into(&doc.title, HitKind::Title, 0, dict, &mut hits);

    for (i, header) in doc.headers.iter().enumerate() {
        scan_into(header, HitKind::Header, i as u32, dict, &mut hits);
    }

    for (i, text) in doc.texts.iter().enumerate() {
        scan_into(text, HitKind::Text, i as u32, dict, &mut hits);
    }

    for (i, anchor) in doc.anchors.iter().enumerate() {
        scan_into(&anchor.text, HitKind::Anchor, i as u32, dict, &mut hits);
    }

    scan_into(&doc.url, HitKind::Url, 0, dict, &mut hits);

    hits
}
