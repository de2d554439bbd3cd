//! For any normalized tokens `a == b`, `dict.get_word_id(a) == dict.get_word_id(b)`,
//! and ids are monotonically increasing and never reused.

use proptest::prelude::*;
use tempfile::TempDir;
use webdex::dictionary::{normalize, WordDictionary};

proptest! {
    #[test]
    fn normalize_is_idempotent(token in "[[:print:]]{0,24}") {
        let once = normalize(&token);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn surrounding_ascii_punctuation_does_not_change_the_normalized_form(
        word in "[a-zA-Z0-9]{1,12}",
        prefix in "[[:punct:]]{0,4}",
        suffix in "[[:punct:]]{0,4}",
    ) {
        let bare = normalize(&word);
        let decorated = normalize(&format!("{prefix}{word}{suffix}"));
        prop_assert_eq!(bare, decorated);
    }

    #[test]
    fn distinct_normalized_tokens_get_distinct_ids(
        words in prop::collection::hash_set("[a-z]{3,10}", 2..20),
    ) {
        let dir = TempDir::new().unwrap();
        let mut dict = WordDictionary::load(dir.path().join("word_dict")).unwrap();
        let mut ids = Vec::new();
        for w in &words {
            ids.push(dict.get_word_id(w).unwrap());
        }
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), words.len());
    }

    #[test]
    fn ids_are_strictly_increasing_across_registrations(
        words in prop::collection::vec("[a-z]{3,10}", 1..20),
    ) {
        let dir = TempDir::new().unwrap();
        let mut dict = WordDictionary::load(dir.path().join("word_dict")).unwrap();
        let mut seen = std::collections::HashMap::new();
        let mut max_id = 0u32;
        for w in &words {
            let id = dict.get_word_id(w).unwrap();
            if let Some(&prev) = seen.get(w) {
                prop_assert_eq!(id, prev);
            } else {
                prop_assert!(id.0 > max_id);
                max_id = id.0;
                seen.insert(w.clone(), id);
            }
        }
    }
}

#[test]
fn known_boundary_tokens_all_normalize_to_lexicon() {
    for input in ["", "'lexicon'", "lexicon,", ".lexicon", "Lexicon", "LEXICON"] {
        let expected = if input.is_empty() { "" } else { "lexicon" };
        assert_eq!(normalize(input), expected, "input was {input:?}");
    }
}
