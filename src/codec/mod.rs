// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary codec: pack/unpack of [`Hit`](crate::types::Hit),
//! [`ForwardIndexEntry`](crate::types::ForwardIndexEntry),
//! [`ReverseIndexEntry`](crate::types::ReverseIndexEntry),
//! [`LexiconEntry`](crate::types::LexiconEntry), and the textual
//! [`DictionaryEntry`](crate::types::DictionaryEntry). All integer fields are
//! big-endian.
//!
//! Readers use `read_exact` over buffered readers rather than slicing and
//! re-binding a `&[u8]` cursor by hand. Every decode routine here is written
//! against `std::io::Read`.

mod dictionary;
mod forward;
mod hit;
mod reverse;

pub use dictionary::{decode_dictionary_entry, encode_dictionary_entry};
pub use forward::{decode_forward_entry, encode_forward_entry};
pub use hit::{decode_hit, encode_hit, HIT_SIZE};
pub use reverse::{
    decode_lexicon_entry, decode_reverse_entry, encode_lexicon_entry, encode_reverse_entry,
};

use std::fmt;
use std::io::{self, Read, Write};

/// Everything that can go wrong decoding on-disk bytes.
#[derive(Debug)]
pub enum CodecError {
    /// A length prefix claimed more bytes than remain in the stream.
    LengthPrefixExceedsRemaining { claimed: usize, remaining: usize },
    /// A `Hit` kind byte fell outside the six enumerated values.
    InvalidHitKind(u8),
    /// A string field failed to decode as UTF-8.
    InvalidUtf8,
    /// The underlying reader/writer failed.
    Io(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::LengthPrefixExceedsRemaining { claimed, remaining } => write!(
                f,
                "length prefix {claimed} exceeds {remaining} remaining bytes"
            ),
            CodecError::InvalidHitKind(byte) => write!(f, "invalid hit kind byte {byte}"),
            CodecError::InvalidUtf8 => write!(f, "value is not valid UTF-8"),
            CodecError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        CodecError::Io(e.to_string())
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Write a `u32`-length-prefixed frame: `len(body) ∥ body`.
///
/// Used by the forward-index file to allow seek-then-read, and reused by the
/// reverse-index segment files and lexicon file, which embed their own
/// `body_len` field ahead of each record.
pub fn write_framed<W: Write>(w: &mut W, body: &[u8]) -> CodecResult<()> {
    w.write_all(&(body.len() as u32).to_be_bytes())?;
    w.write_all(body)?;
    Ok(())
}

/// Read a `u32`-length-prefixed frame written by [`write_framed`].
///
/// Returns `Ok(None)` on clean EOF (no bytes at all before the length
/// prefix), so callers can loop until a segment file is exhausted.
pub fn read_framed<R: Read>(r: &mut R) -> CodecResult<Option<Vec<u8>>> {
    let mut len_bytes = [0u8; 4];
    match r.read_exact(&mut len_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }
    let len = u32::from_be_bytes(len_bytes) as usize;
    let mut body = vec![0u8; len];
    r.read_exact(&mut body).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::LengthPrefixExceedsRemaining {
                claimed: len,
                remaining: 0,
            }
        } else {
            e.into()
        }
    })?;
    Ok(Some(body))
}
