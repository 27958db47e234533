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

/// Precision, height, width and component count.
const FIXED_LEN: u16 = 1 + 2 + 2 + 1;

/// Start-of-frame header, shared by all thirteen SOFn markers.
///
/// `height` and `width` hold the two dimension words read as little-endian.
/// The T.81 values are available through [`FrameHeader::lines`] and
/// [`FrameHeader::samples_per_line`]. Either way the bytes are written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub header: SegmentHeader,
    pub precision: u8,
    pub height: u16,
    pub width: u16,
    pub components: u8,
    /// Component parameters, kept opaque.
    pub data: Vec<u8>,
}

impl FrameHeader {
    pub fn parse<R: ByteReader>(r: &mut R, expected: &[Marker]) -> Result<Self> {
        let header = SegmentHeader::read(r, expected, FIXED_LEN)?;
        let precision = r.read_byte()?;
        let height = r.read_word_le()?;
        let width = r.read_word_le()?;
        let components = r.read_byte()?;
        let data = r.read_bytes(header.payload_len() - FIXED_LEN as usize)?;
        Ok(FrameHeader {
            header,
            precision,
            height,
            width,
            components,
            data,
        })
    }

    /// Number of lines as defined by T.81 (big-endian).
    pub fn lines(&self) -> u16 {
        self.height.swap_bytes()
    }

    /// Number of samples per line as defined by T.81 (big-endian).
    pub fn samples_per_line(&self) -> u16 {
        self.width.swap_bytes()
    }

    pub fn is_progressive(&self) -> bool {
        matches!(
            self.header.marker,
            Marker::Sof2 | Marker::Sof6 | Marker::Sof10 | Marker::Sof14
        )
    }
}

impl SegmentFields for FrameHeader {
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
        self.header.marker.family() == Some(MarkerFamily::StartOfFrame)
            && self.header.payload_len() == FIXED_LEN as usize + self.data.len()
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.header.write(w)?;
        w.write_byte(self.precision)?;
        w.write_word_le(self.height)?;
        w.write_word_le(self.width)?;
        w.write_byte(self.components)?;
        w.write_bytes(&self.data)
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}[{}] precision={} {}x{} components={}>",
            self.header.marker,
            self.header.offset,
            self.header.length,
            self.precision,
            self.samples_per_line(),
            self.lines(),
            self.components
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{error::Error, util::test::sof};

    #[test]
    fn baseline() -> Result<()> {
        let bytes = sof(Marker::Sof0, 16, 8, 3);
        let mut r = Cursor::new(&bytes[..]);
        let frame = FrameHeader::parse(&mut r, &[Marker::Sof0])?;
        assert_eq!(frame.header.length, 8 + 3 * 3);
        assert_eq!(frame.precision, 8);
        assert_eq!(frame.lines(), 8);
        assert_eq!(frame.samples_per_line(), 16);
        assert_eq!(frame.height, 0x0800);
        assert_eq!(frame.components, 3);
        assert_eq!(frame.data.len(), 9);
        assert!(!frame.is_progressive());
        assert!(frame.validate());
        assert_eq!(r.tell()?, bytes.len() as u64);
        assert_eq!(
            frame.to_string(),
            "<SOF0:0[17] precision=8 16x8 components=3>"
        );
        Ok(())
    }

    #[test]
    fn writes_dimension_bytes_unchanged() -> Result<()> {
        let bytes = sof(Marker::Sof2, 640, 480, 1);
        let frame = FrameHeader::parse(&mut Cursor::new(&bytes[..]), &[Marker::Sof2])?;
        assert!(frame.is_progressive());
        let mut out = Vec::new();
        frame.write(&mut out)?;
        assert_eq!(out, bytes);
        Ok(())
    }

    #[test]
    fn too_short_for_fixed_fields() {
        let bytes = [0xffu8, 0xc0, 0x00, 0x07, 8, 0, 1, 0, 1, 1];
        assert!(matches!(
            FrameHeader::parse(&mut Cursor::new(&bytes[..]), &[Marker::Sof0]),
            Err(Error::LengthTooShort {
                length: 7,
                min: 8,
                ..
            })
        ));
    }
}
