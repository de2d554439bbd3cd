//! Close/reopen round-trip and idempotent re-ingestion.

use webdex::{Indexer, IndexerConfig};

use crate::common::doc;

#[test]
fn search_survives_close_and_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let config = IndexerConfig {
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut indexer = Indexer::load(config).unwrap();
        indexer
            .index(&doc(1, "https://www.test-persistence.com", "A page about persistence"))
            .unwrap();
        indexer.close().unwrap();
    }

    let config = IndexerConfig::load(dir.path()).unwrap();
    let mut reopened = Indexer::load(config).unwrap();
    let results = reopened.search_by_keywords("persistence").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(u32::from(results[0].0), 1);
}

#[test]
fn indexing_the_same_document_twice_does_not_duplicate_postings() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = IndexerConfig {
        index_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let mut indexer = Indexer::load(config).unwrap();

    let page = doc(1, "https://www.test-persistence.com", "A page about persistence");
    indexer.index(&page).unwrap();
    indexer.index(&page).unwrap();

    let results = indexer.search_by_keywords("persistence").unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn config_sidecar_survives_reopen_with_overridden_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = IndexerConfig {
        index_dir: dir.path().to_path_buf(),
        dampener: 0.65,
        page_rank_iteration: 7,
    };
    {
        let mut indexer = Indexer::load(config).unwrap();
        indexer.index(&doc(1, "https://a.example", "A")).unwrap();
        indexer.close().unwrap();
    }

    let reloaded = IndexerConfig::load(dir.path()).unwrap();
    assert_eq!(reloaded.dampener, 0.65);
    assert_eq!(reloaded.page_rank_iteration, 7);
}
