//! PageRank properties: termination, finiteness, and the no-edges baseline.

use proptest::prelude::*;
use tempfile::TempDir;
use webdex::link_graph::LinkGraph;
use webdex::ranker::{IterativePageRank, Ranker};
use webdex::types::{Anchor, PageId};

fn anchor(url: &str) -> Anchor {
    Anchor {
        text: "link".into(),
        url: url.into(),
    }
}

proptest! {
    #[test]
    fn graph_with_no_edges_scores_every_page_at_the_baseline(
        page_count in 0usize..20,
        damping in 0.05f64..0.95,
    ) {
        let dir = TempDir::new().unwrap();
        let mut graph = LinkGraph::load(dir.path()).unwrap();
        for i in 0..page_count {
            graph.map_page(PageId(i as u32), &format!("https://bench.example/{i}"));
        }

        let mut ranker = IterativePageRank::new(damping, 20);
        ranker.recompute(&graph).unwrap();

        for i in 0..page_count {
            let score = ranker.score(&format!("https://bench.example/{i}"));
            prop_assert!((score - (1.0 - damping)).abs() < 1e-9);
        }
    }

    #[test]
    fn scores_stay_finite_over_a_random_link_structure(
        edges in prop::collection::vec((0usize..12, 0usize..12), 0..30),
        damping in 0.05f64..0.95,
    ) {
        let dir = TempDir::new().unwrap();
        let mut graph = LinkGraph::load(dir.path()).unwrap();
        for i in 0..12 {
            graph.map_page(PageId(i as u32), &format!("https://bench.example/{i}"));
        }

        let mut outbound: std::collections::HashMap<usize, Vec<Anchor>> = std::collections::HashMap::new();
        for (from, to) in &edges {
            outbound
                .entry(*from)
                .or_default()
                .push(anchor(&format!("https://bench.example/{to}")));
        }
        for (from, anchors) in &outbound {
            graph.record_links(PageId(*from as u32), anchors);
        }

        let mut ranker = IterativePageRank::new(damping, 100);
        ranker.recompute(&graph).unwrap();

        for i in 0..12 {
            let score = ranker.score(&format!("https://bench.example/{i}"));
            prop_assert!(score.is_finite());
        }
    }
}
