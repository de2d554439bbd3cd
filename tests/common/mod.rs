//! Shared test fixtures.

#![allow(dead_code)]

use webdex::{Anchor, Indexer, IndexerConfig, PageDocument};

pub fn doc(doc_id: u64, url: &str, title: &str) -> PageDocument {
    PageDocument {
        doc_id,
        title: title.to_string(),
        url: url.to_string(),
        ..Default::default()
    }
}

pub fn doc_with_anchors(doc_id: u64, url: &str, title: &str, anchors: Vec<Anchor>) -> PageDocument {
    PageDocument {
        doc_id,
        title: title.to_string(),
        url: url.to_string(),
        anchors,
        ..Default::default()
    }
}

pub fn anchor(url: &str) -> Anchor {
    Anchor {
        text: "link".to_string(),
        url: url.to_string(),
    }
}

/// Open an indexer rooted at a fresh temporary directory. The `TempDir` must
/// be kept alive by the caller for as long as the indexer is in use.
pub fn temp_indexer() -> (tempfile::TempDir, Indexer) {
    let dir = tempfile::TempDir::new().unwrap();
    let config = IndexerConfig {
        index_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let indexer = Indexer::load(config).unwrap();
    (dir, indexer)
}
