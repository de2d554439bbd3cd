// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the index: hits, entries, and the documents they
//! come from.
//!
//! # Invariants
//!
//! - **Hit**: `kind` is one of the six enumerated [`HitKind`] values; `section`
//!   and `position` are 0-based ordinals within their kind.
//! - **ForwardIndexEntry**: every `word_id` key was registered with the
//!   [`crate::dictionary::WordDictionary`] before the entry was persisted.
//! - **LexiconEntry**: `pages` is sorted ascending with no duplicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type-safe page identifier.
///
/// Distinguishes a page id from a word id or a raw offset at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PageId(pub u32);

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl From<PageId> for u32 {
    fn from(id: PageId) -> Self {
        id.0
    }
}

/// Type-safe word identifier, dense and 1-based (see [`crate::dictionary::WordDictionary`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WordId(pub u32);

impl From<u32> for WordId {
    fn from(id: u32) -> Self {
        WordId(id)
    }
}

impl From<WordId> for u32 {
    fn from(id: WordId) -> Self {
        id.0
    }
}

/// The six hit kinds a word occurrence can be tagged with.
///
/// Packed as a single byte on disk; any other byte value is a
/// [`crate::codec::CodecError::InvalidHitKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HitKind {
    Text = 1,
    Anchor = 2,
    Title = 3,
    Header = 4,
    Url = 5,
    Reference = 6,
}

impl HitKind {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(HitKind::Text),
            2 => Some(HitKind::Anchor),
            3 => Some(HitKind::Title),
            4 => Some(HitKind::Header),
            5 => Some(HitKind::Url),
            6 => Some(HitKind::Reference),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// A single positioned occurrence of a word within a typed section.
///
/// Packed size is 9 bytes: `u8 kind ∥ u32 section ∥ u32 position`, all
/// big-endian. Two hits are equal iff all three fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    pub kind: HitKind,
    pub section: u32,
    pub position: u32,
}

impl Hit {
    pub fn new(kind: HitKind, section: u32, position: u32) -> Self {
        Hit {
            kind,
            section,
            position,
        }
    }
}

/// Page-centric entry: what words a page contains and where.
///
/// Every `word_id` key must be known to the word dictionary at persistence
/// time. Hit ordering within a word reflects scan order, not sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardIndexEntry {
    pub page_id: PageId,
    pub hits: BTreeMap<WordId, Vec<Hit>>,
}

impl ForwardIndexEntry {
    pub fn new(page_id: PageId) -> Self {
        ForwardIndexEntry {
            page_id,
            hits: BTreeMap::new(),
        }
    }
}

/// Word-centric entry: one page's contribution of hits for one word.
///
/// The `word_id` is not part of the on-disk record (it is implied by which
/// segment file the entry lives in). Callers restore it after decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndexEntry {
    pub word_id: WordId,
    pub page_id: PageId,
    pub hits: Vec<Hit>,
}

impl ReverseIndexEntry {
    pub fn new(word_id: WordId, page_id: PageId) -> Self {
        ReverseIndexEntry {
            word_id,
            page_id,
            hits: Vec::new(),
        }
    }
}

/// The set of page-ids known to contain a given word.
///
/// Stored sorted and de-duplicated; see [`crate::reverse_index::Lexicon`] for
/// the in-memory sorted-set wrapper that enforces this before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word_id: WordId,
    pub pages: Vec<PageId>,
}

impl LexiconEntry {
    pub fn new(word_id: WordId) -> Self {
        LexiconEntry {
            word_id,
            pages: Vec::new(),
        }
    }
}

/// A `key:value` text record, split on the LAST colon so that keys which are
/// themselves URLs (containing `://`) survive intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub key: String,
    pub value: String,
}

impl DictionaryEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        DictionaryEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A [`DictionaryEntry`] specialized to `word -> word_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDictionaryEntry {
    pub word: String,
    pub word_id: WordId,
}

/// An anchor on a page: the visible text and the URL it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub text: String,
    pub url: String,
}

/// A crawled page, as handed over by the (out-of-scope) message-broker
/// consumer. `checksum` and `html` are carried for interface fidelity with
/// the upstream crawler contract; the indexing core does not inspect them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    pub doc_id: u64,
    pub title: String,
    #[serde(default)]
    pub checksum: Vec<u8>,
    pub url: String,
    #[serde(default)]
    pub html: Vec<u8>,
    #[serde(default)]
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
}
