// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The closed set of segment layouts and the [`Segment`] sum type over them.

use std::{fmt, io::Write};

use crate::{
    byte_io::ByteReader,
    error::Result,
    marker::{Marker, MarkerFamily},
    options::DecodeOptions,
};

pub mod app0;
pub mod fixed;
pub mod frame;
pub mod generic;
pub mod header;
pub mod huffman;
pub mod scan;

pub use app0::{DensityUnits, JfifHeader};
pub use fixed::MarkerSegment;
pub use frame::FrameHeader;
pub use generic::OpaqueSegment;
pub use header::SegmentHeader;
pub use huffman::HuffmanTable;
pub use scan::{ScanComponent, ScanSegment};

/// Operations every segment layout provides.
pub trait SegmentFields: fmt::Display {
    fn marker(&self) -> Marker;

    /// Offset of the `0xff` prefix in the stream the segment was read from.
    fn offset(&self) -> u64;

    /// Size of the segment on disk: 2 for bare markers, declared length + 2
    /// otherwise. For SOS this excludes the entropy-coded data.
    fn encoded_len(&self) -> u64;

    /// The variable-size part of the segment, if it has one.
    fn payload(&self) -> Option<&[u8]>;

    /// Checks that the fields are consistent with the declared length and the
    /// format rules of the segment family.
    fn validate(&self) -> bool;

    /// Writes the segment exactly as it was read. Lengths are not recomputed.
    fn write<W: Write>(&self, w: &mut W) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    StartOfImage(MarkerSegment),
    EndOfImage(MarkerSegment),
    Jfif(JfifHeader),
    Application(OpaqueSegment),
    QuantizationTable(OpaqueSegment),
    StartOfFrame(FrameHeader),
    HuffmanTable(HuffmanTable),
    StartOfScan(ScanSegment),
}

macro_rules! for_each_variant {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Segment::StartOfImage($s) | Segment::EndOfImage($s) => $body,
            Segment::Jfif($s) => $body,
            Segment::Application($s) | Segment::QuantizationTable($s) => $body,
            Segment::StartOfFrame($s) => $body,
            Segment::HuffmanTable($s) => $body,
            Segment::StartOfScan($s) => $body,
        }
    };
}

impl Segment {
    /// Parses one segment of the given family starting at the current
    /// position of `r`.
    pub fn parse<R: ByteReader>(
        r: &mut R,
        family: MarkerFamily,
        options: &DecodeOptions,
    ) -> Result<Segment> {
        Ok(match family {
            MarkerFamily::StartOfImage => {
                Segment::StartOfImage(MarkerSegment::parse(r, Marker::Soi)?)
            }
            MarkerFamily::EndOfImage => Segment::EndOfImage(MarkerSegment::parse(r, Marker::Eoi)?),
            MarkerFamily::Jfif => Segment::Jfif(JfifHeader::parse(r)?),
            MarkerFamily::Application => {
                Segment::Application(OpaqueSegment::parse(r, APPLICATION_MARKERS)?)
            }
            MarkerFamily::QuantizationTable => {
                Segment::QuantizationTable(OpaqueSegment::parse(r, &[Marker::Dqt])?)
            }
            MarkerFamily::StartOfFrame => {
                Segment::StartOfFrame(FrameHeader::parse(r, START_OF_FRAME_MARKERS)?)
            }
            MarkerFamily::HuffmanTable => Segment::HuffmanTable(HuffmanTable::parse(r)?),
            MarkerFamily::StartOfScan => {
                Segment::StartOfScan(ScanSegment::parse(r, options.scan_size_limit)?)
            }
        })
    }

    /// Bytes this segment occupies in the stream, including the scan data
    /// that follows an SOS header.
    pub fn span_len(&self) -> u64 {
        match self {
            Segment::StartOfScan(scan) => scan.encoded_len() + scan.image.len() as u64,
            _ => self.encoded_len(),
        }
    }

    pub fn family(&self) -> MarkerFamily {
        match self {
            Segment::StartOfImage(_) => MarkerFamily::StartOfImage,
            Segment::EndOfImage(_) => MarkerFamily::EndOfImage,
            Segment::Jfif(_) => MarkerFamily::Jfif,
            Segment::Application(_) => MarkerFamily::Application,
            Segment::QuantizationTable(_) => MarkerFamily::QuantizationTable,
            Segment::StartOfFrame(_) => MarkerFamily::StartOfFrame,
            Segment::HuffmanTable(_) => MarkerFamily::HuffmanTable,
            Segment::StartOfScan(_) => MarkerFamily::StartOfScan,
        }
    }
}

const APPLICATION_MARKERS: &[Marker] = &[
    Marker::App1,
    Marker::App2,
    Marker::App3,
    Marker::App4,
    Marker::App5,
    Marker::App6,
    Marker::App7,
    Marker::App8,
    Marker::App9,
    Marker::App10,
    Marker::App11,
    Marker::App12,
    Marker::App13,
    Marker::App14,
    Marker::App15,
];

const START_OF_FRAME_MARKERS: &[Marker] = &[
    Marker::Sof0,
    Marker::Sof1,
    Marker::Sof2,
    Marker::Sof3,
    Marker::Sof5,
    Marker::Sof6,
    Marker::Sof7,
    Marker::Sof9,
    Marker::Sof10,
    Marker::Sof11,
    Marker::Sof13,
    Marker::Sof14,
    Marker::Sof15,
];

impl SegmentFields for Segment {
    fn marker(&self) -> Marker {
        for_each_variant!(self, s => s.marker())
    }

    fn offset(&self) -> u64 {
        for_each_variant!(self, s => s.offset())
    }

    fn encoded_len(&self) -> u64 {
        for_each_variant!(self, s => s.encoded_len())
    }

    fn payload(&self) -> Option<&[u8]> {
        for_each_variant!(self, s => s.payload())
    }

    fn validate(&self) -> bool {
        self.marker().family() == Some(self.family()) && for_each_variant!(self, s => s.validate())
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        for_each_variant!(self, s => s.write(w))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_variant!(self, s => fmt::Display::fmt(s, f))
    }
}
