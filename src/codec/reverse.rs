// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `ReverseIndexEntry` and `LexiconEntry` wire formats.
//!
//! Both are "stream forms": each record carries its own `body_len` so a
//! segment file can be read end-to-end without a separate index.
//!
//! `ReverseIndexEntry`: `u32 body_len ∥ u32 page_id ∥ u16 hit_count ∥ hit_count × Hit`
//! `LexiconEntry`:      `u32 body_len ∥ u32 word_id ∥ u32 page_count ∥ page_count × u32`
//!
//! Neither record stores its own `word_id` inline in the `ReverseIndexEntry`
//! case. It's implied by the segment file the record lives in, so decode
//! returns `word_id = WordId(0)` and the caller must overwrite it.

use std::io::{Cursor, Read, Write};

use super::hit::{decode_hit, encode_hit};
use super::{read_framed, write_framed, CodecResult};
use crate::types::{LexiconEntry, PageId, ReverseIndexEntry, WordId};

pub fn encode_reverse_entry<W: Write>(entry: &ReverseIndexEntry, w: &mut W) -> CodecResult<()> {
    let mut body = Vec::new();
    body.extend_from_slice(&entry.page_id.0.to_be_bytes());
    body.extend_from_slice(&(entry.hits.len() as u16).to_be_bytes());
    for hit in &entry.hits {
        encode_hit(hit, &mut body)?;
    }
    write_framed(w, &body)
}

/// Decode one framed `ReverseIndexEntry`. Returns `Ok(None)` at a clean
/// segment-file boundary. The decoded entry's `word_id` is `WordId(0)`; the
/// caller (who knows which segment it read) must set the real value.
pub fn decode_reverse_entry<R: Read>(r: &mut R) -> CodecResult<Option<ReverseIndexEntry>> {
    let Some(body) = read_framed(r)? else {
        return Ok(None);
    };
    let mut cursor = Cursor::new(body);

    let mut u32_buf = [0u8; 4];
    cursor.read_exact(&mut u32_buf)?;
    let page_id = PageId(u32::from_be_bytes(u32_buf));

    let mut u16_buf = [0u8; 2];
    cursor.read_exact(&mut u16_buf)?;
    let hit_count = u16::from_be_bytes(u16_buf);

    let mut entry = ReverseIndexEntry::new(WordId(0), page_id);
    for _ in 0..hit_count {
        entry.hits.push(decode_hit(&mut cursor)?);
    }
    Ok(Some(entry))
}

pub fn encode_lexicon_entry<W: Write>(entry: &LexiconEntry, w: &mut W) -> CodecResult<()> {
    let mut body = Vec::new();
    body.extend_from_slice(&entry.word_id.0.to_be_bytes());
    body.extend_from_slice(&(entry.pages.len() as u32).to_be_bytes());
    for page in &entry.pages {
        body.extend_from_slice(&page.0.to_be_bytes());
    }
    write_framed(w, &body)
}

pub fn decode_lexicon_entry<R: Read>(r: &mut R) -> CodecResult<Option<LexiconEntry>> {
    let Some(body) = read_framed(r)? else {
        return Ok(None);
    };
    let mut cursor = Cursor::new(body);

    let mut u32_buf = [0u8; 4];
    cursor.read_exact(&mut u32_buf)?;
    let word_id = WordId(u32::from_be_bytes(u32_buf));

    cursor.read_exact(&mut u32_buf)?;
    let page_count = u32::from_be_bytes(u32_buf);

    let mut entry = LexiconEntry::new(word_id);
    for _ in 0..page_count {
        cursor.read_exact(&mut u32_buf)?;
        entry.pages.push(PageId(u32::from_be_bytes(u32_buf)));
    }
    Ok(Some(entry))
}
