// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A persistent inverted-index search engine in the spirit of the original
//! "Anatomy of a Large-Scale Hypertextual Web Search Engine" paper: ingest
//! crawled page documents and answer keyword queries with page ids ordered
//! by a PageRank-style score.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ dictionary │──▶│ forward_index │──▶│ reverse_index │
//! │ (word-id)  │   │ (page→words)  │   │ (word→pages)  │
//! └────────────┘   └───────────────┘   └───────────────┘
//!        ▲                                     │
//!        │                                     ▼
//! ┌────────────┐                       ┌───────────────┐
//! │  tokenize  │                       │  link_graph   │
//! │ (sections  │                       │ (outbound/    │
//! │  → hits)   │                       │  referrers)   │
//! └────────────┘                       └───────┬───────┘
//!                                               ▼
//!                                        ┌──────────────┐
//!                                        │    ranker    │
//!                                        │  (PageRank)  │
//!                                        └──────┬───────┘
//!                                               ▼
//!                                        ┌──────────────┐
//!                                        │   indexer    │
//!                                        │  (façade)    │
//!                                        └──────────────┘
//! ```
//!
//! Every persisted mapping that's a simple key→value table is a JSON
//! sidecar; every index segment uses the length-prefixed binary framing in
//! [`codec`]. See [`indexer::Indexer`] for the entry point.

pub mod codec;
pub mod dictionary;
pub mod error;
pub mod forward_index;
pub mod indexer;
pub mod link_graph;
pub mod ranker;
pub mod reverse_index;
pub mod tokenize;
pub mod types;
pub mod util;

pub use error::{IndexerError, Result};
pub use indexer::{Indexer, IndexerConfig};
pub use types::{Anchor, ForwardIndexEntry, Hit, HitKind, LexiconEntry, PageDocument, PageId, ReverseIndexEntry, WordId};
