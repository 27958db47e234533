// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::{fmt, io::Cursor};

use crate::{
    decode::decode,
    error::Result,
    segment::{FrameHeader, JfifHeader, ScanSegment, Segment, SegmentFields},
};

/// A decoded JPEG/JFIF file: its segments in stream order, SOI first and EOI
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jfif {
    segments: Vec<Segment>,
    trailing_len: u64,
}

impl Jfif {
    pub(crate) fn new(segments: Vec<Segment>, trailing_len: u64) -> Self {
        Self {
            segments,
            trailing_len,
        }
    }

    /// Builds a container from already parsed segments. Nothing is checked
    /// until the container is encoded.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self::new(segments, 0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode(Cursor::new(bytes))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the source stream continued after EOI.
    pub fn has_trailing_data(&self) -> bool {
        self.trailing_len > 0
    }

    /// Number of bytes that followed EOI in the source stream. They are not
    /// part of the container.
    pub fn trailing_len(&self) -> u64 {
        self.trailing_len
    }

    /// Total size of the encoded container.
    pub fn encoded_len(&self) -> u64 {
        self.segments.iter().map(Segment::span_len).sum()
    }

    /// First segment whose range `offset..=offset + encoded_len` contains
    /// `offset`. The upper bound is inclusive, so an offset on the boundary
    /// between two segments resolves to the earlier one.
    pub fn segment_at_offset(&self, offset: u64) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| (s.offset()..=s.offset() + s.encoded_len()).contains(&offset))
    }

    pub fn app0(&self) -> Option<&JfifHeader> {
        self.segments.iter().find_map(|s| match s {
            Segment::Jfif(h) => Some(h),
            _ => None,
        })
    }

    pub fn frame_header(&self) -> Option<&FrameHeader> {
        self.segments.iter().find_map(|s| match s {
            Segment::StartOfFrame(h) => Some(h),
            _ => None,
        })
    }

    pub fn scans(&self) -> impl Iterator<Item = &ScanSegment> {
        self.segments.iter().filter_map(|s| match s {
            Segment::StartOfScan(scan) => Some(scan),
            _ => None,
        })
    }
}

impl fmt::Display for Jfif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            writeln!(f, "{s}")?;
        }
        if self.has_trailing_data() {
            writeln!(f, "<{} trailing bytes>", self.trailing_len)?;
        }
        Ok(())
    }
}
