// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::{fmt, io::Write};

use super::{SegmentFields, header::SegmentHeader};
use crate::{
    byte_io::{ByteReader, ByteWriter},
    error::Result,
    marker::{Marker, MarkerFamily},
};

/// Length-delimited segment whose payload is kept as raw bytes. Used for
/// APP1 to APP15 and for quantization tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueSegment {
    pub header: SegmentHeader,
    pub data: Vec<u8>,
}

impl OpaqueSegment {
    pub fn parse<R: ByteReader>(r: &mut R, expected: &[Marker]) -> Result<Self> {
        let header = SegmentHeader::read(r, expected, 0)?;
        let data = r.read_bytes(header.payload_len())?;
        Ok(OpaqueSegment { header, data })
    }
}

impl SegmentFields for OpaqueSegment {
    fn marker(&self) -> Marker {
        self.header.marker
    }

    fn offset(&self) -> u64 {
        self.header.offset
    }

    fn encoded_len(&self) -> u64 {
        self.header.encoded_len()
    }

    fn payload(&self) -> Option<&[u8]> {
        Some(&self.data)
    }

    fn validate(&self) -> bool {
        matches!(
            self.header.marker.family(),
            Some(MarkerFamily::Application | MarkerFamily::QuantizationTable)
        ) && self.header.length >= 2
            && self.data.len() == self.header.payload_len()
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.header.write(w)?;
        w.write_bytes(&self.data)
    }
}

impl fmt::Display for OpaqueSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}[{}] data[{}]",
            self.header.marker,
            self.header.offset,
            self.header.length,
            self.data.len()
        )?;
        // Most APPn payloads start with a NUL-terminated signature such as
        // "Exif" or "http://ns.adobe.com/xap/1.0/".
        let signature: Vec<u8> = self
            .data
            .iter()
            .take_while(|&&b| b != 0)
            .take(32)
            .copied()
            .collect();
        if !signature.is_empty() && signature.iter().all(|b| b.is_ascii_graphic()) {
            write!(f, " {:?}", String::from_utf8_lossy(&signature))?;
        }
        write!(f, ">")
    }
}
