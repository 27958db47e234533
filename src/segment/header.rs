// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::io::Write;

use crate::{
    byte_io::{ByteReader, ByteWriter},
    error::{Error, Result},
    marker::{MARKER_PREFIX, Marker},
};

/// Size of the length field, which counts itself.
pub const LENGTH_FIELD_SIZE: u16 = 2;

/// Reads the two marker bytes and checks that they introduce `expected`.
pub(crate) fn read_marker<R: ByteReader>(r: &mut R, expected: &[Marker]) -> Result<Marker> {
    let offset = r.tell()?;
    let bytes = r.read_array::<2>()?;
    if bytes[0] != MARKER_PREFIX {
        return Err(Error::InvalidPrefix { offset, bytes });
    }
    let marker = Marker::from_byte(bytes[1]).ok_or(Error::UnknownMarker { offset, bytes })?;
    if !expected.contains(&marker) {
        return Err(Error::UnexpectedMarker {
            offset,
            marker,
            expected: expected_name(expected),
        });
    }
    Ok(marker)
}

fn expected_name(expected: &[Marker]) -> &'static str {
    match expected {
        [single] => single.name(),
        _ => "a marker of the same family",
    }
}

/// Marker plus declared length, shared by every length-bearing segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHeader {
    pub marker: Marker,
    /// Declared length, including the two length bytes.
    pub length: u16,
    /// Offset of the 0xff prefix in the source stream.
    pub offset: u64,
}

impl SegmentHeader {
    /// Reads prefix, marker and length. `fixed_len` is the number of payload
    /// bytes the caller is about to read unconditionally; a declared length
    /// that cannot hold them is rejected before anything else is consumed.
    pub fn read<R: ByteReader>(r: &mut R, expected: &[Marker], fixed_len: u16) -> Result<Self> {
        let offset = r.tell()?;
        let marker = read_marker(r, expected)?;
        let length = r.read_word_be()?;
        let min = LENGTH_FIELD_SIZE + fixed_len;
        if length < min {
            return Err(Error::LengthTooShort {
                offset,
                marker,
                length,
                min,
            });
        }
        Ok(SegmentHeader {
            marker,
            length,
            offset,
        })
    }

    /// Bytes following the length field. Zero for a length below 2.
    pub fn payload_len(&self) -> usize {
        self.length.saturating_sub(LENGTH_FIELD_SIZE) as usize
    }

    /// Length of the segment on disk, marker included.
    pub fn encoded_len(&self) -> u64 {
        self.length as u64 + 2
    }

    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_byte(MARKER_PREFIX)?;
        w.write_byte(self.marker.byte())?;
        w.write_word_be(self.length)
    }
}
