// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! PageRank over the link graph.
//!
//! Two interchangeable strategies, chosen at construction:
//!
//! - [`IterativePageRank`] (preferred): N fixed iterations of the damped
//!   update, finite and terminating regardless of graph topology.
//! - [`RecursiveMemoPageRank`] (legacy): per-query memoized recursion that
//!   short-circuits cycles by treating a revisit as its currently-stored
//!   score. It does **not** apply damping to the link-sum. This matches an
//!   older revision's behavior intentionally, so don't "correct" it into
//!   matching the iterative formula.

use std::collections::{HashMap, HashSet};

use crate::error::{IndexerError, Result};
use crate::link_graph::LinkGraph;

/// Anything that can score URLs by link structure and recompute those
/// scores against a [`LinkGraph`].
pub trait Ranker {
    /// Seed a newly-indexed page's score at the baseline `1 - damping`.
    /// A no-op if the page already has a score.
    fn initialize_page(&mut self, url: &str);

    /// Current score for `url`, or the baseline if never seen.
    fn score(&self, url: &str) -> f64;

    /// Recompute scores for every URL the graph currently knows.
    fn recompute(&mut self, graph: &LinkGraph) -> Result<()>;

    fn damping(&self) -> f64;
}

/// Fixed-iteration PageRank: `PR[u] = (1 - d) + d * Σ PR[p]/out(p)` over
/// referrers `p` of `u`, starting from `PR[u] = 1 - d` everywhere.
pub struct IterativePageRank {
    damping: f64,
    iterations: usize,
    scores: HashMap<String, f64>,
}

impl IterativePageRank {
    pub fn new(damping: f64, iterations: usize) -> Self {
        IterativePageRank {
            damping,
            iterations,
            scores: HashMap::new(),
        }
    }

    fn baseline(&self) -> f64 {
        1.0 - self.damping
    }
}

impl Ranker for IterativePageRank {
    fn initialize_page(&mut self, url: &str) {
        self.scores
            .entry(url.to_string())
            .or_insert(1.0 - self.damping);
    }

    fn score(&self, url: &str) -> f64 {
        self.scores.get(url).copied().unwrap_or_else(|| self.baseline())
    }

    fn recompute(&mut self, graph: &LinkGraph) -> Result<()> {
        let baseline = self.baseline();
        let urls: Vec<String> = graph.known_urls().map(str::to_string).collect();

        for url in &urls {
            self.scores.entry(url.clone()).or_insert(baseline);
        }

        for _ in 0..self.iterations {
            let mut next = HashMap::with_capacity(urls.len());
            for url in &urls {
                let mut sum = 0.0;
                for &referrer in graph.referrers(url) {
                    let Some(referrer_url) = graph.url_for_page(referrer) else {
                        continue;
                    };
                    let out = graph.outbound_count(referrer);
                    if out == 0 {
                        continue;
                    }
                    let referrer_score = self.scores.get(referrer_url).copied().unwrap_or(baseline);
                    sum += referrer_score / out as f64;
                }
                next.insert(url.clone(), baseline + self.damping * sum);
            }
            self.scores = next;
        }

        if self.scores.values().any(|s| !s.is_finite()) {
            return Err(IndexerError::PageRankPersistException);
        }
        Ok(())
    }

    fn damping(&self) -> f64 {
        self.damping
    }
}

/// Legacy per-query recursive ranker with a cycle-breaking memo.
///
/// Kept for compatibility with the revision that used it; the iterative
/// form above is preferred for new deployments.
pub struct RecursiveMemoPageRank {
    damping: f64,
    scores: HashMap<String, f64>,
}

impl RecursiveMemoPageRank {
    pub fn new(damping: f64) -> Self {
        RecursiveMemoPageRank {
            damping,
            scores: HashMap::new(),
        }
    }

    fn baseline(&self) -> f64 {
        1.0 - self.damping
    }

    fn compute(&mut self, url: &str, graph: &LinkGraph, visited: &mut HashSet<String>) -> f64 {
        if visited.contains(url) {
            return self.scores.get(url).copied().unwrap_or_else(|| self.baseline());
        }
        visited.insert(url.to_string());

        let mut sum = 0.0;
        for &referrer in graph.referrers(url) {
            if let Some(referrer_url) = graph.url_for_page(referrer) {
                let out = graph.outbound_count(referrer);
                if out == 0 {
                    continue;
                }
                let referrer_url = referrer_url.to_string();
                let referrer_score = self.compute(&referrer_url, graph, visited);
                sum += referrer_score / out as f64;
            }
        }

        // No damping applied here, see the module doc comment.
        let score = self.baseline() + sum;
        self.scores.insert(url.to_string(), score);
        score
    }
}

impl Ranker for RecursiveMemoPageRank {
    fn initialize_page(&mut self, url: &str) {
        self.scores
            .entry(url.to_string())
            .or_insert(1.0 - self.damping);
    }

    fn score(&self, url: &str) -> f64 {
        self.scores.get(url).copied().unwrap_or_else(|| self.baseline())
    }

    fn recompute(&mut self, graph: &LinkGraph) -> Result<()> {
        let urls: Vec<String> = graph.known_urls().map(str::to_string).collect();
        for url in &urls {
            let mut visited = HashSet::new();
            self.compute(url, graph, &mut visited);
        }
        Ok(())
    }

    fn damping(&self) -> f64 {
        self.damping
    }
}
