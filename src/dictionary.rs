// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalizes tokens and maps them to stable, dense word ids.
//!
//! Persistence is a flat text file, one `word:id` line per entry, using the
//! [`crate::codec`] dictionary-entry text format.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::{decode_dictionary_entry, encode_dictionary_entry};
use crate::error::Result;
use crate::types::{DictionaryEntry, WordId};

/// Normalize a token:
///
/// 1. strip trailing whitespace
/// 2. strip leading and trailing runs of non-ASCII-alphanumeric characters;
///    if the token has no ASCII-alphanumeric character at all, skip this
///    step entirely rather than collapsing it to the empty string
/// 3. lowercase
///
/// URLs survive as a single term: `https://www.google.com` starts and ends
/// with an alphanumeric character, so step 2 strips nothing and the `://`
/// in the middle is untouched.
pub fn normalize(token: &str) -> String {
    let trimmed = token.trim_end();
    if trimmed.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    match chars.iter().position(|c| c.is_ascii_alphanumeric()) {
        None => trimmed.to_lowercase(),
        Some(first) => {
            let last = chars
                .iter()
                .rposition(|c| c.is_ascii_alphanumeric())
                .expect("first implies last exists");
            chars[first..=last].iter().collect::<String>().to_lowercase()
        }
    }
}

/// Normalizes tokens, assigns stable 1-based ids, and persists the mapping.
pub struct WordDictionary {
    path: PathBuf,
    word_to_id: HashMap<String, WordId>,
    next_id: u32,
}

/// The part of a [`WordDictionary`] that `get_word_id` mutates, captured
/// before a document is indexed so a failed `index()` call can roll the
/// dictionary back to exactly the state it had before.
pub(crate) struct DictionarySnapshot {
    word_to_id: HashMap<String, WordId>,
    next_id: u32,
}

impl WordDictionary {
    /// Load the dictionary from `path`. A missing file is treated as empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut word_to_id = HashMap::new();
        let mut max_id = 0u32;

        match fs::read(&path) {
            Ok(bytes) => {
                let contents = String::from_utf8(bytes)
                    .map_err(|_| crate::error::IndexerError::Codec(crate::codec::CodecError::InvalidUtf8))?;
                for line in contents.lines() {
                    if line.is_empty() {
                        continue;
                    }
                    let DictionaryEntry { key, value } = decode_dictionary_entry(line);
                    let id: u32 = value
                        .parse()
                        .map_err(|_| crate::error::IndexerError::Value(format!(
                            "non-numeric word id in dictionary entry {line:?}"
                        )))?;
                    max_id = max_id.max(id);
                    word_to_id.insert(key, WordId(id));
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(WordDictionary {
            path,
            word_to_id,
            next_id: max_id + 1,
        })
    }

    /// Normalize `token` and return its word id, registering it if unknown.
    ///
    /// Returns `None` when the normalized token is empty. No id is
    /// allocated for an empty or whitespace-only input.
    pub fn get_word_id(&mut self, token: &str) -> Option<WordId> {
        let normalized = normalize(token);
        if normalized.is_empty() {
            return None;
        }
        if let Some(&id) = self.word_to_id.get(&normalized) {
            return Some(id);
        }
        let id = WordId(self.next_id);
        self.next_id += 1;
        self.word_to_id.insert(normalized, id);
        Some(id)
    }

    /// Capture the current word→id mapping and id counter, for restoring if
    /// a document fails to persist after registering new words.
    pub(crate) fn snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            word_to_id: self.word_to_id.clone(),
            next_id: self.next_id,
        }
    }

    /// Undo every `get_word_id` registration made since `snapshot` was taken.
    pub(crate) fn restore(&mut self, snapshot: DictionarySnapshot) {
        self.word_to_id = snapshot.word_to_id;
        self.next_id = snapshot.next_id;
    }

    /// Look up the id already assigned to a normalized token, without
    /// registering it if unknown.
    pub fn peek_word_id(&self, token: &str) -> Option<WordId> {
        let normalized = normalize(token);
        if normalized.is_empty() {
            return None;
        }
        self.word_to_id.get(&normalized).copied()
    }

    /// Rewrite the dictionary file with every known `word:id` pair.
    pub fn close(&self) -> Result<()> {
        let mut out = String::new();
        for (word, id) in &self.word_to_id {
            let entry = DictionaryEntry::new(word.clone(), id.0.to_string());
            out.push_str(&encode_dictionary_entry(&entry));
            out.push('\n');
        }
        let mut file = fs::File::create(&self.path)?;
        file.write_all(out.as_bytes())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.word_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }
}
