// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::io::{Read, Seek};

use crate::{
    byte_io::ByteReader,
    container::Jfif,
    error::{Error, Result},
    marker::{MARKER_PREFIX, Marker, MarkerFamily},
    options::{DecodeOptions, TrailingData},
    segment::{Segment, SegmentFields},
    util::tracing_wrappers::*,
};

/// Walks a stream from SOI to EOI, one segment at a time.
pub struct Decoder<R> {
    reader: R,
    options: DecodeOptions,
    segments: Vec<Segment>,
    stream_len: Option<u64>,
}

impl<R: Read + Seek> Decoder<R> {
    pub fn new(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader,
            options,
            segments: Vec::new(),
            stream_len: None,
        }
    }

    fn stream_len(&mut self) -> Result<u64> {
        match self.stream_len {
            Some(len) => Ok(len),
            None => {
                let len = self.reader.total_len()?;
                self.stream_len = Some(len);
                Ok(len)
            }
        }
    }

    /// Identifies the segment at the current position without consuming it.
    fn peek_family(&mut self) -> Result<MarkerFamily> {
        let offset = self.reader.tell()?;
        let bytes = self
            .reader
            .peek_array::<2>()
            .map_err(|e| match e {
                Error::Truncated { .. } => Error::Truncated { offset },
                e => e,
            })?;
        if bytes[0] != MARKER_PREFIX {
            return Err(Error::InvalidPrefix { offset, bytes });
        }
        let Some((marker, family)) =
            Marker::from_byte(bytes[1]).and_then(|m| m.family().map(|f| (m, f)))
        else {
            return Err(Error::UnknownMarker { offset, bytes });
        };

        let first = self.segments.is_empty();
        if first != (family == MarkerFamily::StartOfImage) {
            return Err(Error::UnexpectedMarker {
                offset,
                marker,
                expected: if first {
                    "SOI"
                } else {
                    "a segment other than SOI"
                },
            });
        }
        Ok(family)
    }

    /// Decodes the next segment and returns it. Returns `None` once EOI has
    /// been decoded.
    pub fn next_segment(&mut self) -> Result<Option<&Segment>> {
        if matches!(self.segments.last(), Some(Segment::EndOfImage(_))) {
            return Ok(None);
        }
        let offset = self.reader.tell()?;
        if offset >= self.stream_len()? {
            return Err(Error::MissingEndOfImage { offset });
        }
        let family = self.peek_family()?;
        let segment = Segment::parse(&mut self.reader, family, &self.options)?;
        debug!("{segment}");
        self.segments.push(segment);
        Ok(self.segments.last())
    }

    /// Decodes every segment up to and including EOI.
    pub fn decode(mut self) -> Result<Jfif> {
        while self.next_segment()?.is_some() {}

        let end = self.reader.tell()?;
        let trailing_len = self.stream_len()?.saturating_sub(end);
        if trailing_len > 0 {
            if self.options.trailing_data == TrailingData::Reject {
                return Err(Error::TrailingData {
                    offset: end,
                    len: trailing_len,
                });
            }
            warn!(offset = end, len = trailing_len, "ignoring data after EOI");
        }
        Ok(Jfif::new(self.segments, trailing_len))
    }
}

/// Decodes a complete stream with default options.
pub fn decode<R: Read + Seek>(reader: R) -> Result<Jfif> {
    decode_with_options(reader, &DecodeOptions::default())
}

pub fn decode_with_options<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Jfif> {
    Decoder::new(reader, options.clone()).decode()
}
