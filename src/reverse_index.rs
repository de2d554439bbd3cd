// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-centric store: for each word, which pages contain it and where.
//!
//! Backed by one append-only binary segment file per word-id under
//! `reverse_indexes/<word_id>`, plus a single `lexicon` file holding the
//! `word_id → sorted set of page_id` index used to avoid scanning segments
//! when only page-ids are needed at query time.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::codec::{decode_lexicon_entry, decode_reverse_entry, encode_lexicon_entry, encode_reverse_entry};
use crate::error::{IndexerError, Result};
use crate::types::{ForwardIndexEntry, LexiconEntry, PageId, ReverseIndexEntry, WordId};

const SEGMENTS_DIR: &str = "reverse_indexes";
const LEXICON_FILE: &str = "lexicon";

pub struct ReverseIndex {
    segments_dir: PathBuf,
    lexicon_path: PathBuf,
    lexicon: BTreeMap<WordId, BTreeSet<PageId>>,
}

impl ReverseIndex {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let segments_dir = dir.join(SEGMENTS_DIR);
        fs::create_dir_all(&segments_dir)?;
        let lexicon_path = dir.join(LEXICON_FILE);

        let mut lexicon: BTreeMap<WordId, BTreeSet<PageId>> = BTreeMap::new();
        match File::open(&lexicon_path) {
            Ok(file) => {
                let mut reader = BufReader::new(file);
                while let Some(entry) = decode_lexicon_entry(&mut reader)? {
                    let LexiconEntry { word_id, pages } = entry;
                    lexicon.entry(word_id).or_default().extend(pages);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(ReverseIndex {
            segments_dir,
            lexicon_path,
            lexicon,
        })
    }

    fn segment_path(&self, word_id: WordId) -> PathBuf {
        self.segments_dir.join(word_id.0.to_string())
    }

    /// Append one `ReverseIndexEntry` per word in `forward_entry` to that
    /// word's segment, and record the page in the in-memory lexicon.
    ///
    /// All-or-nothing: if word N of M fails to persist, every segment byte
    /// and lexicon insertion made for words 1..N-1 of this same call is
    /// undone before the error is returned.
    pub fn index(&mut self, forward_entry: &ForwardIndexEntry) -> Result<()> {
        let mut written: Vec<(WordId, u64)> = Vec::new();
        let mut inserted: Vec<WordId> = Vec::new();

        for (&word_id, hit_list) in &forward_entry.hits {
            if let Err(e) = self.index_one_word(word_id, forward_entry.page_id, hit_list, &mut written, &mut inserted) {
                self.rollback(&written, &inserted, forward_entry.page_id);
                return Err(e);
            }
        }
        Ok(())
    }

    fn index_one_word(
        &mut self,
        word_id: WordId,
        page_id: PageId,
        hit_list: &[crate::types::Hit],
        written: &mut Vec<(WordId, u64)>,
        inserted: &mut Vec<WordId>,
    ) -> Result<()> {
        let mut entry = ReverseIndexEntry::new(word_id, page_id);
        entry.hits = hit_list.to_vec();

        let path = self.segment_path(word_id);
        let prior_len = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        // Recorded before the write attempt, not after: if the write itself
        // fails partway through, any bytes it already appended need the same
        // truncate-back-to-`prior_len` treatment as an earlier word's.
        written.push((word_id, prior_len));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|_| IndexerError::PageHitMappingPersistException { word_id })?;
        encode_reverse_entry(&entry, &mut file)
            .map_err(|_| IndexerError::PageHitMappingPersistException { word_id })?;
        file.flush()
            .map_err(|_| IndexerError::PageHitMappingPersistException { word_id })?;

        if self.lexicon.entry(word_id).or_default().insert(page_id) {
            inserted.push(word_id);
        }
        Ok(())
    }

    /// Truncate every segment in `written` back to its pre-call length and
    /// remove `page_id` from the lexicon sets it was newly inserted into.
    fn rollback(&mut self, written: &[(WordId, u64)], inserted: &[WordId], page_id: PageId) {
        for &(word_id, prior_len) in written {
            if let Ok(file) = OpenOptions::new().write(true).open(self.segment_path(word_id)) {
                let _ = file.set_len(prior_len);
            }
        }
        for &word_id in inserted {
            if let Some(pages) = self.lexicon.get_mut(&word_id) {
                pages.remove(&page_id);
                if pages.is_empty() {
                    self.lexicon.remove(&word_id);
                }
            }
        }
    }

    /// Read and decode every entry in `word_id`'s segment file, end to end.
    pub fn get_entries(&self, word_id: WordId) -> Result<Vec<ReverseIndexEntry>> {
        let path = self.segment_path(word_id);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::new(file);
        let mut entries = Vec::new();
        while let Some(mut entry) = decode_reverse_entry(&mut reader)? {
            entry.word_id = word_id;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// The sorted, de-duplicated set of pages known to contain `word_id`.
    pub fn get_page_ids(&self, word_id: WordId) -> Vec<PageId> {
        self.lexicon
            .get(&word_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Rewrite the lexicon file with every known word's page set.
    pub fn close(&self) -> Result<()> {
        let mut file = File::create(&self.lexicon_path)?;
        for (&word_id, pages) in &self.lexicon {
            let mut entry = LexiconEntry::new(word_id);
            entry.pages = pages.iter().copied().collect();
            encode_lexicon_entry(&entry, &mut file)
                .map_err(|_| IndexerError::LexiconMappingPersistException { word_id })?;
        }
        Ok(())
    }
}
