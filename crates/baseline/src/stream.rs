// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte stream plumbing around the comparator.

use crate::error::{Error, Result};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Largest chunk moved per read in [`copy_stream`]
pub const CHUNK_SIZE: usize = 512;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Append all of `bytes` to `out` and hand the stream back.
pub fn append_bytes<'a, W: Write>(bytes: &[u8], out: &'a mut W) -> Result<&'a mut W> {
    out.write_all(bytes)?;
    Ok(out)
}

/// Copy `length` bytes from `input` to `out` in chunks of at most [`CHUNK_SIZE`].
///
/// A `length` of 0 copies everything from the current position to the end.
/// Returns the number of bytes copied.
pub fn copy_stream<R, W>(input: &mut R, out: &mut W, length: u64) -> Result<u64>
where
    R: Read + Seek,
    W: Write,
{
    let length = if length == 0 {
        remaining(input)?
    } else {
        length
    };

    let mut buf = [0u8; CHUNK_SIZE];
    let mut rest = length;
    while rest > 0 {
        let want = rest.min(CHUNK_SIZE as u64) as usize;
        let read = match input.read(&mut buf[..want]) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended with {} of {} bytes left to copy", rest, length),
            )
            .into());
        }
        out.write_all(&buf[..read])?;
        rest -= read as u64;
    }

    Ok(length)
}

/// Read the whole stream into memory, consuming it.
///
/// The stream is rewound and exactly its declared length is read. It is
/// dropped, and so closed, before this returns.
pub fn read_to_bytes_and_close<R: Read + Seek>(mut stream: R) -> Result<Vec<u8>> {
    let len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(0))?;
    let len = usize::try_from(len).map_err(|_| {
        Error::invalid_argument("stream", format!("length {} does not fit in memory", len))
    })?;

    let mut bytes = vec![0u8; len];
    stream.read_exact(&mut bytes)?;
    Ok(bytes)
}

/// Fail unless `stream` is positioned at its start.
pub fn ensure_at_start<S: Seek>(stream: &mut S, param: &'static str) -> Result<()> {
    let position = stream.stream_position()?;
    if position != 0 {
        return Err(Error::invalid_argument(
            param,
            format!("must be in position 0, found {}", position),
        ));
    }
    Ok(())
}

/// Read the rest of `stream` and decode it to text.
pub fn decode_text<R: Read>(stream: &mut R) -> Result<String> {
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}

/// Decode bytes to text.
///
/// A UTF-8 or UTF-16 byte order mark selects the encoding and is dropped;
/// without one the bytes are read as UTF-8. Malformed sequences become
/// U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return String::from_utf8_lossy(rest).into_owned();
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    String::from_utf8_lossy(bytes).into_owned()
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));

    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Bytes between the current position and the end, leaving the position unchanged.
fn remaining<S: Seek>(stream: &mut S) -> Result<u64> {
    let position = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(position))?;
    Ok(end.saturating_sub(position))
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
