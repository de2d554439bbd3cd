//! Link-graph and ranking behavior exercised through the `Indexer` façade,
//! beyond the literal S1-S6 scenarios.

use crate::common::{anchor, doc_with_anchors, temp_indexer};

#[test]
fn pages_with_no_inbound_links_rank_at_the_damping_baseline() {
    let (_dir, mut indexer) = temp_indexer();
    indexer.index(&doc_with_anchors(1, "https://a.example", "A", vec![])).unwrap();
    indexer.index(&doc_with_anchors(2, "https://b.example", "A", vec![])).unwrap();

    let ranked = indexer.rank_all_pages().unwrap();
    assert_eq!(ranked.len(), 2);
    for (_, _, score) in &ranked {
        assert!((score - 0.2).abs() < 1e-9, "expected baseline 0.2, got {score}");
    }
}

#[test]
fn reindexing_a_known_url_does_not_change_its_link_graph_state() {
    let (_dir, mut indexer) = temp_indexer();
    let page = doc_with_anchors(1, "https://a.example", "A", vec![anchor("https://b.example")]);
    indexer.index(&page).unwrap();
    // Idempotent: indexing the same url again must not add a second outbound
    // link or a second referrer entry.
    indexer.index(&page).unwrap();

    let ranked = indexer.rank_all_pages().unwrap();
    assert_eq!(ranked.len(), 1, "page b is linked to but never itself indexed");
}

#[test]
fn ranking_state_survives_close_and_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let config = webdex::IndexerConfig {
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut indexer = webdex::Indexer::load(config).unwrap();
        indexer
            .index(&doc_with_anchors(1, "https://a.example", "A", vec![]))
            .unwrap();
        indexer
            .index(&doc_with_anchors(2, "https://b.example", "B", vec![anchor("https://a.example")]))
            .unwrap();
        indexer.close().unwrap();
    }

    let config = webdex::IndexerConfig::load(dir.path()).unwrap();
    let mut reopened = webdex::Indexer::load(config).unwrap();
    let ranked = reopened.rank_all_pages().unwrap();
    let top = ranked.first().unwrap();
    assert_eq!(u32::from(top.0), 1, "page a has an inbound link from b, page b has none");
}
