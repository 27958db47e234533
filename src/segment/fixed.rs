// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::{fmt, io::Write};

use super::{SegmentFields, header::read_marker};
use crate::{
    byte_io::{ByteReader, ByteWriter},
    error::Result,
    marker::{MARKER_PREFIX, Marker, MarkerFamily},
};

/// A bare two-byte marker: SOI or EOI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSegment {
    pub marker: Marker,
    pub offset: u64,
}

impl MarkerSegment {
    pub fn parse<R: ByteReader>(r: &mut R, expected: Marker) -> Result<Self> {
        let offset = r.tell()?;
        let marker = read_marker(r, &[expected])?;
        Ok(MarkerSegment { marker, offset })
    }
}

impl SegmentFields for MarkerSegment {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn offset(&self) -> u64 {
        self.offset
    }

    fn encoded_len(&self) -> u64 {
        2
    }

    fn payload(&self) -> Option<&[u8]> {
        None
    }

    fn validate(&self) -> bool {
        matches!(
            self.marker.family(),
            Some(MarkerFamily::StartOfImage | MarkerFamily::EndOfImage)
        )
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_byte(MARKER_PREFIX)?;
        w.write_byte(self.marker.byte())
    }
}

impl fmt::Display for MarkerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.marker, self.offset)
    }
}
