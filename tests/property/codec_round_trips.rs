//! For every `Hit`/`ForwardIndexEntry`/`ReverseIndexEntry`/`LexiconEntry`/
//! `DictionaryEntry`, `decode(encode(x)) == x`.

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::io::Cursor;

use webdex::codec::{
    decode_dictionary_entry, decode_forward_entry, decode_hit, decode_lexicon_entry,
    decode_reverse_entry, encode_dictionary_entry, encode_forward_entry, encode_hit,
    encode_lexicon_entry, encode_reverse_entry,
};
use webdex::types::{
    DictionaryEntry, ForwardIndexEntry, Hit, HitKind, LexiconEntry, PageId, ReverseIndexEntry, WordId,
};

fn hit_kind() -> impl Strategy<Value = HitKind> {
    prop_oneof![
        Just(HitKind::Text),
        Just(HitKind::Anchor),
        Just(HitKind::Title),
        Just(HitKind::Header),
        Just(HitKind::Url),
        Just(HitKind::Reference),
    ]
}

fn hit() -> impl Strategy<Value = Hit> {
    (hit_kind(), any::<u32>(), any::<u32>()).prop_map(|(kind, section, position)| Hit::new(kind, section, position))
}

proptest! {
    #[test]
    fn hit_round_trips(h in hit()) {
        let mut buf = Vec::new();
        encode_hit(&h, &mut buf).unwrap();
        let decoded = decode_hit(&mut Cursor::new(buf)).unwrap();
        prop_assert_eq!(decoded, h);
    }

    #[test]
    fn forward_entry_round_trips(
        page_id in any::<u32>(),
        hits in prop::collection::vec((1u32..200, prop::collection::vec(hit(), 0..8)), 0..10),
    ) {
        let mut entry = ForwardIndexEntry::new(PageId(page_id));
        let mut map = BTreeMap::new();
        for (word_id, hit_list) in hits {
            map.insert(WordId(word_id), hit_list);
        }
        entry.hits = map;

        let mut buf = Vec::new();
        encode_forward_entry(&entry, &mut buf).unwrap();
        let decoded = decode_forward_entry(&mut Cursor::new(buf)).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn reverse_entry_round_trips_once_word_id_is_restored(
        word_id in any::<u32>(),
        page_id in any::<u32>(),
        hits in prop::collection::vec(hit(), 0..16),
    ) {
        let mut entry = ReverseIndexEntry::new(WordId(word_id), PageId(page_id));
        entry.hits = hits;

        let mut buf = Vec::new();
        encode_reverse_entry(&entry, &mut buf).unwrap();
        let mut decoded = decode_reverse_entry(&mut Cursor::new(buf)).unwrap().unwrap();
        decoded.word_id = entry.word_id;
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn lexicon_entry_round_trips(
        word_id in any::<u32>(),
        pages in prop::collection::vec(any::<u32>(), 0..32),
    ) {
        let mut entry = LexiconEntry::new(WordId(word_id));
        entry.pages = pages.into_iter().map(PageId).collect();

        let mut buf = Vec::new();
        encode_lexicon_entry(&entry, &mut buf).unwrap();
        let decoded = decode_lexicon_entry(&mut Cursor::new(buf)).unwrap().unwrap();
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn dictionary_entry_round_trips_when_key_has_no_colon(
        key in "[a-z]{1,16}",
        value in "[0-9]{1,8}",
    ) {
        let entry = DictionaryEntry::new(key, value);
        let line = encode_dictionary_entry(&entry);
        let decoded = decode_dictionary_entry(&line);
        prop_assert_eq!(decoded, entry);
    }
}
