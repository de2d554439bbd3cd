// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The error hierarchy raised by the core.
//!
//! The original revisions used a class hierarchy rooted at `IndexerException`
//! (see `examples/original_source/index/exceptions.py`). Here that hierarchy
//! becomes one enum, each variant carrying the structured payload the
//! corresponding exception class carried (`page_id`, `word_id`, `url`).

use std::fmt;

use crate::codec::CodecError;
use crate::types::{PageId, WordId};

/// Everything that can go wrong persisting or decoding index state.
#[derive(Debug)]
pub enum IndexerError {
    /// The document could not be persisted atomically; every partial
    /// mutation made while indexing `url` was rolled back before this was
    /// raised.
    IndexException { url: String },
    /// The ranker could not persist updated PageRank scores.
    PageRankPersistException,
    /// Forward-index hit list persistence failed for a page.
    HitListPersistException { page_id: PageId },
    /// Forward-index offset-map persistence failed for a page.
    ForwardMappingPersistException { page_id: PageId },
    /// Reverse-index posting persistence failed for a word.
    PageHitMappingPersistException { word_id: WordId },
    /// Lexicon persistence failed for a word.
    LexiconMappingPersistException { word_id: WordId },
    /// Malformed on-disk bytes; fatal for the affected record.
    Codec(CodecError),
    /// Misuse, e.g. a binary-search range that isn't a multiple of entry size.
    Value(String),
}

impl fmt::Display for IndexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexerError::IndexException { url } => write!(f, "failed to index {url}"),
            IndexerError::PageRankPersistException => {
                write!(f, "failed to update page rank")
            }
            IndexerError::HitListPersistException { page_id } => {
                write!(f, "failed to persist hits for {}", page_id.0)
            }
            IndexerError::ForwardMappingPersistException { page_id } => {
                write!(f, "failed to create forward mappings for {}", page_id.0)
            }
            IndexerError::PageHitMappingPersistException { word_id } => {
                write!(f, "failed to create page hit mappings for {}", word_id.0)
            }
            IndexerError::LexiconMappingPersistException { word_id } => {
                write!(f, "failed to create lexicon mappings for {}", word_id.0)
            }
            IndexerError::Codec(e) => write!(f, "codec error: {e}"),
            IndexerError::Value(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl std::error::Error for IndexerError {}

impl From<CodecError> for IndexerError {
    fn from(e: CodecError) -> Self {
        IndexerError::Codec(e)
    }
}

impl From<std::io::Error> for IndexerError {
    fn from(e: std::io::Error) -> Self {
        IndexerError::Codec(CodecError::Io(e.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, IndexerError>;
