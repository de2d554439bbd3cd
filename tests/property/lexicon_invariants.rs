//! `get_page_ids(w)` is sorted ascending and contains no duplicates, even
//! under repeated indexing of the same page for the same word.

use proptest::prelude::*;
use tempfile::TempDir;
use webdex::reverse_index::ReverseIndex;
use webdex::types::{ForwardIndexEntry, Hit, HitKind, PageId, WordId};

fn forward_entry_for(page_id: u32, word_id: u32) -> ForwardIndexEntry {
    let mut entry = ForwardIndexEntry::new(PageId(page_id));
    entry.hits.insert(WordId(word_id), vec![Hit::new(HitKind::Text, 0, 0)]);
    entry
}

proptest! {
    #[test]
    fn page_ids_for_a_word_are_sorted_and_deduplicated(
        page_ids in prop::collection::vec(1u32..200, 0..60),
    ) {
        let dir = TempDir::new().unwrap();
        let mut reverse = ReverseIndex::load(dir.path()).unwrap();

        for &page_id in &page_ids {
            // Index each page twice to exercise the no-duplicates path.
            reverse.index(&forward_entry_for(page_id, 7)).unwrap();
            reverse.index(&forward_entry_for(page_id, 7)).unwrap();
        }

        let got = reverse.get_page_ids(WordId(7));
        let mut expected: Vec<PageId> = page_ids.into_iter().map(PageId).collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(got.clone(), expected);
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
    }
}
