// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::{fmt, io::Write};

use super::{SegmentFields, header::SegmentHeader};
use crate::{
    byte_io::{ByteReader, ByteWriter},
    error::{Error, Result},
    marker::Marker,
    scan_data::extract_scan_data,
    util::tracing_wrappers::*,
};

/// Scan component selector and its DC/AC table destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanComponent {
    pub id: u8,
    /// DC table in the high nibble, AC table in the low nibble.
    pub tables: u8,
}

/// A start-of-scan header together with the entropy-coded data after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSegment {
    pub header: SegmentHeader,
    pub components: Vec<ScanComponent>,
    /// Spectral selection and successive approximation bytes, kept opaque.
    pub data: Vec<u8>,
    /// Entropy-coded bytes up to the EOI marker, stuffing and restart markers
    /// included.
    pub image: Vec<u8>,
}

impl ScanSegment {
    pub fn parse<R: ByteReader>(r: &mut R, scan_size_limit: Option<u64>) -> Result<Self> {
        let header = SegmentHeader::read(r, &[Marker::Sos], 1)?;
        let count = r.read_byte()?;
        let available = header.payload_len() - 1;
        if 2 * count as usize > available {
            return Err(Error::ComponentCountMismatch {
                offset: header.offset,
                count,
                available,
            });
        }
        let mut components = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let [id, tables] = r.read_array::<2>()?;
            components.push(ScanComponent { id, tables });
        }
        let data = r.read_bytes(available - 2 * count as usize)?;

        let scan = extract_scan_data(r, scan_size_limit)?;
        trace!(
            offset = header.offset,
            len = scan.data.len(),
            stuffed = scan.stuffed_bytes,
            restarts = scan.restart_markers,
            embedded = scan.embedded_markers,
            "scan data"
        );

        Ok(ScanSegment {
            header,
            components,
            data,
            image: scan.data,
        })
    }

    /// Offset of the first entropy-coded byte.
    pub fn image_offset(&self) -> u64 {
        self.header.offset + self.header.encoded_len()
    }
}

impl SegmentFields for ScanSegment {
    fn marker(&self) -> Marker {
        self.header.marker
    }

    fn offset(&self) -> u64 {
        self.header.offset
    }

    /// Header only; see [`ScanSegment::image_offset`] for the data.
    fn encoded_len(&self) -> u64 {
        self.header.encoded_len()
    }

    /// The header bytes after the component list. The entropy-coded data is
    /// in [`ScanSegment::image`].
    fn payload(&self) -> Option<&[u8]> {
        Some(&self.data)
    }

    fn validate(&self) -> bool {
        self.header.marker == Marker::Sos
            && self.components.len() <= u8::MAX as usize
            && self.header.payload_len() == 1 + 2 * self.components.len() + self.data.len()
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.header.write(w)?;
        w.write_byte(self.components.len() as u8)?;
        for c in &self.components {
            w.write_byte(c.id)?;
            w.write_byte(c.tables)?;
        }
        w.write_bytes(&self.data)?;
        w.write_bytes(&self.image)
    }
}

impl fmt::Display for ScanSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}[{}] components=[",
            self.header.marker, self.header.offset, self.header.length
        )?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{:02x}", c.id, c.tables)?;
        }
        write!(f, "] image@{}[{}]>", self.image_offset(), self.image.len())
    }
}
