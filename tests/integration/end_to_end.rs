//! Exercises indexing and search end to end through the public `Indexer`
//! façade.

use crate::common::{anchor, doc, doc_with_anchors, temp_indexer};
use webdex::{Anchor, PageDocument};

#[test]
fn single_page_indexing_matches_expected_forward_hits() {
    let (_dir, mut indexer) = temp_indexer();

    let page = PageDocument {
        doc_id: 1,
        title: "Test Page".into(),
        url: "https://www.test.com".into(),
        headers: vec!["Go to example".into()],
        texts: vec!["Go with example".into()],
        anchors: vec![Anchor {
            text: "Example".into(),
            url: "https://www.example.com".into(),
        }],
        ..Default::default()
    };
    indexer.index(&page).unwrap();

    // S2: searching "test" returns exactly page 1.
    let results = indexer.search_by_keywords("test").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(u32::from(results[0].0), 1);
}

#[test]
fn three_page_ranking_orders_by_inbound_link_count() {
    let (_dir, mut indexer) = temp_indexer();

    // P1 (doc_id=3) has no outbound anchors but receives two inbound links.
    indexer.index(&doc(3, "https://page1.example", "Page")).unwrap();
    // P2 (doc_id=1) links to P1.
    indexer
        .index(&doc_with_anchors(
            1,
            "https://page2.example",
            "Page",
            vec![anchor("https://page1.example")],
        ))
        .unwrap();
    // P3 (doc_id=2) links to both P2 and P1.
    indexer
        .index(&doc_with_anchors(
            2,
            "https://page3.example",
            "Page",
            vec![anchor("https://page2.example"), anchor("https://page1.example")],
        ))
        .unwrap();

    let results = indexer.search_by_keywords("page").unwrap();
    let ids: Vec<u32> = results.into_iter().map(|(p, _)| u32::from(p)).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn unknown_keyword_returns_no_matches() {
    let (_dir, mut indexer) = temp_indexer();
    indexer.index(&doc(1, "https://www.test.com", "Test Page")).unwrap();
    assert!(indexer.search_by_keywords("absent").unwrap().is_empty());
}
