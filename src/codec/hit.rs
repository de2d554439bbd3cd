// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Hit` wire format: `u8 kind ∥ u32 section ∥ u32 position`, 9 bytes, big-endian.

use std::io::{Read, Write};

use super::{CodecError, CodecResult};
use crate::types::{Hit, HitKind};

pub const HIT_SIZE: usize = 9;

pub fn encode_hit<W: Write>(hit: &Hit, w: &mut W) -> CodecResult<()> {
    w.write_all(&[hit.kind.as_byte()])?;
    w.write_all(&hit.section.to_be_bytes())?;
    w.write_all(&hit.position.to_be_bytes())?;
    Ok(())
}

pub fn decode_hit<R: Read>(r: &mut R) -> CodecResult<Hit> {
    let mut buf = [0u8; HIT_SIZE];
    r.read_exact(&mut buf)?;
    let kind = HitKind::from_byte(buf[0]).ok_or(CodecError::InvalidHitKind(buf[0]))?;
    let section = u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]);
    let position = u32::from_be_bytes([buf[5], buf[6], buf[7], buf[8]]);
    Ok(Hit::new(kind, section, position))
}
