// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page-centric store: for each page, which words it contains and where.
//!
//! Backed by an append-only binary file (`forward_index`) plus a sidecar
//! `page_id → byte_offset` map (`forward_index_map`) dumped as JSON on close
//! and reloaded on open.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::codec::{decode_forward_entry, encode_forward_entry, read_framed, write_framed};
use crate::dictionary::WordDictionary;
use crate::error::{IndexerError, Result};
use crate::tokenize::scan_sections;
use crate::types::{ForwardIndexEntry, PageDocument, PageId};

const DATA_FILE: &str = "forward_index";
const MAP_FILE: &str = "forward_index_map";

pub struct ForwardIndex {
    data_path: PathBuf,
    map_path: PathBuf,
    file: File,
    offsets: HashMap<PageId, u64>,
}

impl ForwardIndex {
    /// Open (creating if necessary) the forward index under `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let data_path = dir.join(DATA_FILE);
        let map_path = dir.join(MAP_FILE);

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&data_path)?;

        let offsets = match fs::read_to_string(&map_path) {
            Ok(contents) => {
                let raw: HashMap<String, u64> = serde_json::from_str(&contents)
                    .map_err(|e| IndexerError::Value(format!("malformed forward_index_map: {e}")))?;
                raw.into_iter()
                    .map(|(k, v)| {
                        k.parse::<u32>()
                            .map(|id| (PageId(id), v))
                            .map_err(|_| IndexerError::Value(format!("non-numeric page id key {k:?}")))
                    })
                    .collect::<Result<_>>()?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(ForwardIndex {
            data_path,
            map_path,
            file,
            offsets,
        })
    }

    /// Scan `doc`'s sections, append the resulting entry, and record its
    /// offset. Registers new words with `dict` along the way.
    ///
    /// If the append itself fails partway through, any bytes already written
    /// for this entry are truncated back off before the error is returned.
    /// The data file never carries a dangling partial record. Word
    /// registrations made in `dict` during scanning are the caller's
    /// responsibility to roll back (see `Indexer::index`), since this method
    /// has no way to tell which of `dict`'s entries predate this call.
    pub fn index(&mut self, doc: &PageDocument, dict: &mut WordDictionary) -> Result<ForwardIndexEntry> {
        let page_id = PageId(doc.doc_id as u32);
        let hits = scan_sections(doc, dict);

        let mut entry = ForwardIndexEntry::new(page_id);
        entry.hits = hits;

        let mut body = Vec::new();
        encode_forward_entry(&entry, &mut body)
            .map_err(|_| IndexerError::HitListPersistException { page_id })?;

        let offset = self
            .file
            .seek(SeekFrom::End(0))
            .map_err(|_| IndexerError::HitListPersistException { page_id })?;

        let write_result = write_framed(&mut self.file, &body)
            .map_err(|_| IndexerError::HitListPersistException { page_id })
            .and_then(|()| {
                self.file
                    .flush()
                    .map_err(|_| IndexerError::HitListPersistException { page_id })
            });

        if let Err(e) = write_result {
            let _ = self.file.set_len(offset);
            return Err(e);
        }

        self.offsets.insert(page_id, offset);
        Ok(entry)
    }

    /// Undo a previously-successful `index()` call for `page_id`: drop its
    /// offset entry and truncate the data file back to `prior_len` (the
    /// length `data_len` reported just before that call). Used when a later
    /// stage of document ingestion fails and the whole document must roll
    /// back.
    pub fn discard(&mut self, page_id: PageId, prior_len: u64) -> Result<()> {
        self.offsets.remove(&page_id);
        self.file.set_len(prior_len)?;
        Ok(())
    }

    /// Current length of the append-only data file, for the caller to
    /// remember before calling `index` so it can `discard` back to this
    /// point if a later stage fails.
    pub fn data_len(&mut self) -> Result<u64> {
        Ok(self.file.seek(SeekFrom::End(0))?)
    }

    /// Fetch the persisted entry for `page_id`, or `None` if unknown.
    pub fn get_entry(&mut self, page_id: PageId) -> Result<Option<ForwardIndexEntry>> {
        let Some(&offset) = self.offsets.get(&page_id) else {
            return Ok(None);
        };
        self.file.seek(SeekFrom::Start(offset))?;
        let body = read_framed(&mut self.file)?
            .ok_or_else(|| IndexerError::Value(format!("truncated forward entry at offset {offset}")))?;
        let entry = decode_forward_entry(&mut body.as_slice())?;
        Ok(Some(entry))
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.offsets.contains_key(&page_id)
    }

    /// Flush the offset sidecar map to disk as JSON.
    pub fn close(&mut self) -> Result<()> {
        self.file.flush()?;
        let raw: HashMap<String, u64> = self
            .offsets
            .iter()
            .map(|(k, v)| (k.0.to_string(), *v))
            .collect();
        let json = serde_json::to_string(&raw)
            .map_err(|e| IndexerError::Value(format!("failed to serialize forward_index_map: {e}")))?;
        let mut map_file = File::create(&self.map_path)?;
        map_file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// Helper only used when tests need the raw data file path.
#[cfg(test)]
fn read_whole_file(path: &Path) -> Vec<u8> {
    let mut buf = Vec::new();
    File::open(path).unwrap().read_to_end(&mut buf).unwrap();
    buf
}
