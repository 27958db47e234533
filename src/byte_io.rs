// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Byte and word level helpers on top of `std::io`.
//!
//! Marker lengths and most fixed fields are big-endian. The frame header
//! dimensions are stored as little-endian words, so both orders are exposed.

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};

pub(crate) fn io_error(op: &'static str, source: std::io::Error) -> Error {
    Error::Io { op, source }
}

/// Reading side. Implemented for every `Read + Seek`, so a
/// `Cursor<&[u8]>`, a `File` or a `BufReader<File>` can all be decoded.
pub trait ByteReader: Read + Seek {
    /// Current offset from the start of the stream.
    fn tell(&mut self) -> Result<u64> {
        self.stream_position()
            .map_err(|e| io_error("querying the stream position", e))
    }

    /// Total length of the stream. The position is left unchanged.
    fn total_len(&mut self) -> Result<u64> {
        let pos = self.tell()?;
        let end = self
            .seek(SeekFrom::End(0))
            .map_err(|e| io_error("seeking to the end of the stream", e))?;
        self.seek(SeekFrom::Start(pos))
            .map_err(|e| io_error("restoring the stream position", e))?;
        Ok(end)
    }

    fn read_byte(&mut self) -> Result<u8> {
        match self.read_u8() {
            Ok(v) => Ok(v),
            Err(e) => Err(self.read_failure(e)),
        }
    }

    fn read_word_be(&mut self) -> Result<u16> {
        match self.read_u16::<BigEndian>() {
            Ok(v) => Ok(v),
            Err(e) => Err(self.read_failure(e)),
        }
    }

    fn read_word_le(&mut self) -> Result<u16> {
        match self.read_u16::<LittleEndian>() {
            Ok(v) => Ok(v),
            Err(e) => Err(self.read_failure(e)),
        }
    }

    /// Reads exactly `len` bytes.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let start = self.tell()?;
        let mut buf = Vec::new();
        let read = Read::take(&mut *self, len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| io_error("reading segment data", e))?;
        if read != len {
            return Err(Error::Truncated {
                offset: start + read as u64,
            });
        }
        Ok(buf)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        match self.read_exact(&mut buf) {
            Ok(()) => Ok(buf),
            Err(e) => Err(self.read_failure(e)),
        }
    }

    /// Reads `N` bytes and steps back over them, leaving the position
    /// untouched.
    fn peek_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let buf = self.read_array::<N>()?;
        self.step_back(N as u64)?;
        Ok(buf)
    }

    /// Steps back over `count` bytes that were already read.
    fn step_back(&mut self, count: u64) -> Result<()> {
        self.seek_relative(-(count as i64))
            .map_err(|e| io_error("rewinding the stream", e))
    }

    #[doc(hidden)]
    fn read_failure(&mut self, e: std::io::Error) -> Error {
        if e.kind() != ErrorKind::UnexpectedEof {
            return io_error("reading", e);
        }
        match self.tell() {
            Ok(offset) => Error::Truncated { offset },
            Err(e) => e,
        }
    }
}

impl<R: Read + Seek + ?Sized> ByteReader for R {}

/// Writing side, implemented for every `Write`.
pub trait ByteWriter: Write {
    fn write_byte(&mut self, v: u8) -> Result<()> {
        self.write_u8(v).map_err(|e| io_error("writing", e))
    }

    fn write_word_be(&mut self, v: u16) -> Result<()> {
        self.write_u16::<BigEndian>(v)
            .map_err(|e| io_error("writing", e))
    }

    fn write_word_le(&mut self, v: u16) -> Result<()> {
        self.write_u16::<LittleEndian>(v)
            .map_err(|e| io_error("writing", e))
    }

    fn write_bytes(&mut self, v: &[u8]) -> Result<()> {
        self.write_all(v).map_err(|e| io_error("writing", e))
    }
}

impl<W: Write + ?Sized> ByteWriter for W {}
