// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `ForwardIndexEntry` wire format:
//! `u32 page_id ∥ u32 word_count ∥ { u32 word_id ∥ u16 hit_count ∥ hit_count × Hit }×word_count`
//!
//! This is the record body only. The forward-index *file* wraps each entry
//! in its own `u32` length frame (see [`crate::codec::write_framed`]); that
//! framing is not part of the entry's own format.

use std::io::{Read, Write};

use super::hit::{decode_hit, encode_hit};
use super::CodecResult;
use crate::types::{ForwardIndexEntry, PageId, WordId};

pub fn encode_forward_entry<W: Write>(entry: &ForwardIndexEntry, w: &mut W) -> CodecResult<()> {
    w.write_all(&entry.page_id.0.to_be_bytes())?;
    w.write_all(&(entry.hits.len() as u32).to_be_bytes())?;
    for (word_id, hit_list) in &entry.hits {
        w.write_all(&word_id.0.to_be_bytes())?;
        w.write_all(&(hit_list.len() as u16).to_be_bytes())?;
        for hit in hit_list {
            encode_hit(hit, w)?;
        }
    }
    Ok(())
}

pub fn decode_forward_entry<R: Read>(r: &mut R) -> CodecResult<ForwardIndexEntry> {
    let mut u32_buf = [0u8; 4];
    r.read_exact(&mut u32_buf)?;
    let page_id = PageId(u32::from_be_bytes(u32_buf));

    r.read_exact(&mut u32_buf)?;
    let word_count = u32::from_be_bytes(u32_buf);

    let mut entry = ForwardIndexEntry::new(page_id);
    for _ in 0..word_count {
        r.read_exact(&mut u32_buf)?;
        let word_id = WordId(u32::from_be_bytes(u32_buf));

        let mut u16_buf = [0u8; 2];
        r.read_exact(&mut u16_buf)?;
        let hit_count = u16::from_be_bytes(u16_buf);

        let mut hits = Vec::with_capacity(hit_count as usize);
        for _ in 0..hit_count {
            hits.push(decode_hit(r)?);
        }
        entry.hits.insert(word_id, hits);
    }
    Ok(entry)
}
