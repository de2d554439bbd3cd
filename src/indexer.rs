// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The façade tying dictionary, forward index, reverse index, link graph,
//! and ranker together into a single entry point for ingesting and
//! searching documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::WordDictionary;
use crate::error::{IndexerError, Result};
use crate::forward_index::ForwardIndex;
use crate::link_graph::LinkGraph;
use crate::ranker::{IterativePageRank, Ranker};
use crate::reverse_index::ReverseIndex;
use crate::types::{PageDocument, PageId};

const WORD_DICT_FILE: &str = "word_dict";
const CONFIG_FILE: &str = "webdex.json";

/// Where the index lives, and the ranker's damping factor and iteration
/// count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    pub index_dir: PathBuf,
    pub dampener: f64,
    pub page_rank_iteration: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            index_dir: PathBuf::from("index"),
            dampener: 0.8,
            page_rank_iteration: 100,
        }
    }
}

impl IndexerConfig {
    /// Load `webdex.json` from `index_dir` if present, falling back to
    /// defaults for any field the sidecar doesn't override. `index_dir`
    /// itself always wins over whatever the sidecar says, since the caller
    /// just told us where to look.
    pub fn load(index_dir: impl Into<PathBuf>) -> Result<Self> {
        let index_dir = index_dir.into();
        let sidecar_path = index_dir.join(CONFIG_FILE);

        let mut config = match fs::read_to_string(&sidecar_path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| IndexerError::Value(format!("malformed {CONFIG_FILE}: {e}")))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexerConfig::default(),
            Err(e) => return Err(e.into()),
        };
        config.index_dir = index_dir;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| IndexerError::Value(format!("failed to serialize {CONFIG_FILE}: {e}")))?;
        fs::create_dir_all(&self.index_dir)?;
        fs::write(self.index_dir.join(CONFIG_FILE), json)?;
        Ok(())
    }
}

/// Orchestrates the dictionary, the two indexes, the link graph, and the
/// ranker. Not thread-safe: callers must not call `index` and
/// `search_by_keywords` concurrently.
pub struct Indexer {
    config: IndexerConfig,
    dict: WordDictionary,
    forward: ForwardIndex,
    reverse: ReverseIndex,
    graph: LinkGraph,
    ranker: Box<dyn Ranker>,
}

impl Indexer {
    pub fn load(config: IndexerConfig) -> Result<Self> {
        let dir = config.index_dir.clone();
        fs::create_dir_all(&dir)?;

        let dict = WordDictionary::load(dir.join(WORD_DICT_FILE))?;
        let forward = ForwardIndex::load(&dir)?;
        let reverse = ReverseIndex::load(&dir)?;
        let graph = LinkGraph::load(&dir)?;
        let ranker = Box::new(IterativePageRank::new(config.dampener, config.page_rank_iteration));

        Ok(Indexer {
            config,
            dict,
            forward,
            reverse,
            graph,
            ranker,
        })
    }

    /// Swap in a different ranking strategy (e.g. the legacy recursive
    /// form). Existing per-page scores are discarded; `recompute` runs lazily
    /// on the next search.
    pub fn with_ranker(mut self, ranker: Box<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Index one document. A no-op if `doc.url` is already mapped:
    /// re-ingesting a known page never duplicates state.
    ///
    /// All-or-nothing: a failure partway through rolls back every in-memory
    /// and on-disk mutation this call made (new dictionary word ids, the
    /// forward-index append, and any reverse-index segment/lexicon writes)
    /// and the underlying failure is reported as an [`IndexerError::IndexException`]
    /// for `doc.url`. The link graph and ranker are only touched after both
    /// indexes have durably committed, so they never need rolling back.
    pub fn index(&mut self, doc: &PageDocument) -> Result<()> {
        if self.graph.page_for_url(&doc.url).is_some() {
            return Ok(());
        }

        let page_id = PageId(doc.doc_id as u32);
        let dict_snapshot = self.dict.snapshot();
        let forward_prior_len = self.forward.data_len()?;

        let entry = match self.forward.index(doc, &mut self.dict) {
            Ok(entry) => entry,
            Err(_) => {
                self.dict.restore(dict_snapshot);
                return Err(IndexerError::IndexException { url: doc.url.clone() });
            }
        };

        if self.reverse.index(&entry).is_err() {
            self.dict.restore(dict_snapshot);
            let _ = self.forward.discard(page_id, forward_prior_len);
            return Err(IndexerError::IndexException { url: doc.url.clone() });
        }

        self.graph.map_page(page_id, &doc.url);
        self.graph.record_links(page_id, &doc.anchors);
        self.ranker.initialize_page(&doc.url);

        Ok(())
    }

    /// Normalize `keyword`, ensure PageRank is current, and return matching
    /// pages ordered by descending score (ties broken by ascending page id).
    pub fn search_by_keywords(&mut self, keyword: &str) -> Result<Vec<(PageId, f64)>> {
        let Some(word_id) = self.dict.peek_word_id(keyword) else {
            return Ok(Vec::new());
        };

        self.ranker.recompute(&self.graph)?;

        let mut scored: Vec<(PageId, f64)> = self
            .reverse
            .get_page_ids(word_id)
            .into_iter()
            .map(|page_id| {
                let score = self
                    .graph
                    .url_for_page(page_id)
                    .map(|url| self.ranker.score(url))
                    .unwrap_or_else(|| 1.0 - self.ranker.damping());
                (page_id, score)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        Ok(scored)
    }

    /// Force a PageRank recomputation and return every known page ordered by
    /// descending score (ties broken by ascending page id), for operational
    /// inspection. Not used by `search_by_keywords` itself.
    pub fn rank_all_pages(&mut self) -> Result<Vec<(PageId, String, f64)>> {
        self.ranker.recompute(&self.graph)?;

        let mut scored: Vec<(PageId, String, f64)> = self
            .graph
            .known_urls()
            .filter_map(|url| {
                self.graph
                    .page_for_url(url)
                    .map(|page_id| (page_id, url.to_string(), self.ranker.score(url)))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        Ok(scored)
    }

    /// Flush every component's persistent state.
    pub fn close(&mut self) -> Result<()> {
        self.dict.close()?;
        self.forward.close()?;
        self.reverse.close()?;
        self.graph.close()?;
        self.config.save()?;
        Ok(())
    }
}
