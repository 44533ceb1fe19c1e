/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple byte reader over an in-memory buffer

/// An encapsulation of a byte stream reader
///
/// Reads past the end of the stream do not panic, single byte reads
/// return zero and the position stays put, so callers are expected to
/// check [`has`](Self::has) or [`eof`](Self::eof) first.
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Return true if the stream can provide `num` more bytes
    ///
    /// ```
    /// use pamqoi_core::bytestream::ZByteReader;
    /// let stream = ZByteReader::new(&[1, 2, 3]);
    /// assert!(stream.has(3));
    /// assert!(!stream.has(4));
    /// ```
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    /// Return true if there are no more bytes in the stream
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Current position in the stream
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Read a single byte, returning zero if the stream is exhausted
    #[inline]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Return the next byte without advancing
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Move `num` bytes back, stopping at the start of the stream
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Move `num` bytes forward, stopping at the end of the stream
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Return the next `num` bytes and advance past them,
    /// or `None` if the stream does not have that many
    pub fn get_as_ref(&mut self, num: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(num)?;
        let bytes = self.stream.get(self.position..end)?;

        self.position = end;
        Some(bytes)
    }

    /// Return `num` bytes starting `offset` bytes from the current
    /// position without advancing
    pub fn peek_at(&self, offset: usize, num: usize) -> Option<&'a [u8]> {
        let start = self.position.checked_add(offset)?;
        let end = start.checked_add(num)?;

        self.stream.get(start..end)
    }
}
