// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::path::PathBuf;

use thiserror::Error;

use crate::marker::Marker;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The byte stream does not have the shape of a marker-segment container.
    Structural,
    /// A segment is well delimited but its contents break a format rule.
    Invariant,
    /// The underlying reader or writer failed.
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid marker prefix {bytes:02x?} at offset {offset}, expected ff")]
    InvalidPrefix { offset: u64, bytes: [u8; 2] },
    #[error("Unknown marker {bytes:02x?} at offset {offset}")]
    UnknownMarker { offset: u64, bytes: [u8; 2] },
    #[error("Unexpected {marker} marker at offset {offset}, expected {expected}")]
    UnexpectedMarker {
        offset: u64,
        marker: Marker,
        expected: &'static str,
    },
    #[error("{marker} segment at offset {offset} declares length {length}, needs at least {min}")]
    LengthTooShort {
        offset: u64,
        marker: Marker,
        length: u16,
        min: u16,
    },
    #[error("Stream truncated at offset {offset}")]
    Truncated { offset: u64 },
    #[error("Stream ended at offset {offset} without an EOI marker")]
    MissingEndOfImage { offset: u64 },
    #[error("Scan data at offset {offset} exceeds the limit of {limit} bytes")]
    ScanTooLarge { offset: u64, limit: u64 },
    #[error("{len} bytes of trailing data after EOI at offset {offset}")]
    TrailingData { offset: u64, len: u64 },
    #[error("DHT at offset {offset}: symbol counts sum to {sum}, max is 256")]
    HuffmanCountOverflow { offset: u64, sum: usize },
    #[error("DHT at offset {offset}: {actual} symbol bytes, counts sum to {expected}")]
    HuffmanLengthMismatch {
        offset: u64,
        expected: usize,
        actual: usize,
    },
    #[error("APP0 at offset {offset}: invalid identifier {identifier:02x?}, expected \"JFIF\\0\"")]
    InvalidJfifIdentifier { offset: u64, identifier: [u8; 5] },
    #[error("APP0 at offset {offset}: invalid density units {units}")]
    InvalidDensityUnits { offset: u64, units: u8 },
    #[error("APP0 at offset {offset}: thumbnail {x}x{y} needs {needed} bytes, segment has {available}")]
    ThumbnailTooLarge {
        offset: u64,
        x: u8,
        y: u8,
        needed: usize,
        available: usize,
    },
    #[error("SOS at offset {offset}: {count} components do not fit in {available} header bytes")]
    ComponentCountMismatch {
        offset: u64,
        count: u8,
        available: usize,
    },
    #[error("Invalid {marker} segment at offset {offset}")]
    InvalidSegment { offset: u64, marker: Marker },
    #[error("I/O error while {op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read input file {}: {source}", .path.display())]
    InputReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPrefix { .. }
            | Error::UnknownMarker { .. }
            | Error::UnexpectedMarker { .. }
            | Error::LengthTooShort { .. }
            | Error::Truncated { .. }
            | Error::MissingEndOfImage { .. }
            | Error::ScanTooLarge { .. }
            | Error::TrailingData { .. } => ErrorKind::Structural,
            Error::HuffmanCountOverflow { .. }
            | Error::HuffmanLengthMismatch { .. }
            | Error::InvalidJfifIdentifier { .. }
            | Error::InvalidDensityUnits { .. }
            | Error::ThumbnailTooLarge { .. }
            | Error::ComponentCountMismatch { .. }
            | Error::InvalidSegment { .. } => ErrorKind::Invariant,
            Error::Io { .. }
            | Error::InputReadFailure { .. }
            | Error::OutputWriteFailure { .. } => ErrorKind::Io,
        }
    }

    /// Offset in the source stream that the error refers to, if any.
    pub fn offset(&self) -> Option<u64> {
        match *self {
            Error::InvalidPrefix { offset, .. }
            | Error::UnknownMarker { offset, .. }
            | Error::UnexpectedMarker { offset, .. }
            | Error::LengthTooShort { offset, .. }
            | Error::Truncated { offset }
            | Error::MissingEndOfImage { offset }
            | Error::ScanTooLarge { offset, .. }
            | Error::TrailingData { offset, .. }
            | Error::HuffmanCountOverflow { offset, .. }
            | Error::HuffmanLengthMismatch { offset, .. }
            | Error::InvalidJfifIdentifier { offset, .. }
            | Error::InvalidDensityUnits { offset, .. }
            | Error::ThumbnailTooLarge { offset, .. }
            | Error::ComponentCountMismatch { offset, .. }
            | Error::InvalidSegment { offset, .. } => Some(offset),
            Error::Io { .. }
            | Error::InputReadFailure { .. }
            | Error::OutputWriteFailure { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let e = Error::InvalidPrefix {
            offset: 0,
            bytes: [0x12, 0x34],
        };
        assert_eq!(e.kind(), ErrorKind::Structural);
        assert_eq!(e.offset(), Some(0));
        assert_eq!(
            e.to_string(),
            "Invalid marker prefix [12, 34] at offset 0, expected ff"
        );

        let e = Error::HuffmanCountOverflow { offset: 20, sum: 300 };
        assert_eq!(e.kind(), ErrorKind::Invariant);

        let e = Error::Io {
            op: "reading",
            source: std::io::Error::other("boom"),
        };
        assert_eq!(e.kind(), ErrorKind::Io);
        assert_eq!(e.offset(), None);
    }
}
