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
};

pub const JFIF_IDENTIFIER: [u8; 5] = *b"JFIF\0";

/// Identifier, version, units, two densities and two thumbnail dimensions.
const FIXED_LEN: u16 = 5 + 2 + 1 + 2 + 2 + 1 + 1;

/// Unit of [`JfifHeader::x_density`] and [`JfifHeader::y_density`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnits {
    /// Densities only give the pixel aspect ratio.
    AspectRatio,
    DotsPerInch,
    DotsPerCm,
}

impl DensityUnits {
    pub fn from_byte(units: u8) -> Option<DensityUnits> {
        match units {
            0 => Some(DensityUnits::AspectRatio),
            1 => Some(DensityUnits::DotsPerInch),
            2 => Some(DensityUnits::DotsPerCm),
            _ => None,
        }
    }
}

/// The APP0 "JFIF" header, followed by an optional RGB thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JfifHeader {
    pub header: SegmentHeader,
    pub identifier: [u8; 5],
    /// Major and minor version, usually 1.1 or 1.2.
    pub version: [u8; 2],
    pub units: u8,
    pub x_density: u16,
    pub y_density: u16,
    pub x_thumbnail: u8,
    pub y_thumbnail: u8,
    /// Packed 24-bit RGB, `3 * x_thumbnail * y_thumbnail` bytes.
    pub thumbnail: Vec<u8>,
    /// Bytes covered by the declared length after the thumbnail. Normally
    /// empty; kept so that such files still round-trip.
    pub extra: Vec<u8>,
}

impl JfifHeader {
    pub fn parse<R: ByteReader>(r: &mut R) -> Result<Self> {
        let header = SegmentHeader::read(r, &[Marker::App0], FIXED_LEN)?;
        let offset = header.offset;

        let identifier = r.read_array::<5>()?;
        let version = r.read_array::<2>()?;
        let units = r.read_byte()?;
        let x_density = r.read_word_be()?;
        let y_density = r.read_word_be()?;
        let x_thumbnail = r.read_byte()?;
        let y_thumbnail = r.read_byte()?;

        if identifier != JFIF_IDENTIFIER {
            return Err(Error::InvalidJfifIdentifier { offset, identifier });
        }
        if DensityUnits::from_byte(units).is_none() {
            return Err(Error::InvalidDensityUnits { offset, units });
        }

        let needed = thumbnail_len(x_thumbnail, y_thumbnail);
        let available = header.payload_len() - FIXED_LEN as usize;
        if needed > available {
            return Err(Error::ThumbnailTooLarge {
                offset,
                x: x_thumbnail,
                y: y_thumbnail,
                needed,
                available,
            });
        }
        let thumbnail = r.read_bytes(needed)?;
        let extra = r.read_bytes(available - needed)?;

        Ok(JfifHeader {
            header,
            identifier,
            version,
            units,
            x_density,
            y_density,
            x_thumbnail,
            y_thumbnail,
            thumbnail,
            extra,
        })
    }

    pub fn density_units(&self) -> Option<DensityUnits> {
        DensityUnits::from_byte(self.units)
    }
}

fn thumbnail_len(x: u8, y: u8) -> usize {
    3 * x as usize * y as usize
}

impl SegmentFields for JfifHeader {
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
        Some(&self.thumbnail)
    }

    fn validate(&self) -> bool {
        self.header.marker == Marker::App0
            && self.identifier == JFIF_IDENTIFIER
            && self.density_units().is_some()
            && self.thumbnail.len() == thumbnail_len(self.x_thumbnail, self.y_thumbnail)
            && self.header.payload_len()
                == FIXED_LEN as usize + self.thumbnail.len() + self.extra.len()
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.header.write(w)?;
        w.write_bytes(&self.identifier)?;
        w.write_bytes(&self.version)?;
        w.write_byte(self.units)?;
        w.write_word_be(self.x_density)?;
        w.write_word_be(self.y_density)?;
        w.write_byte(self.x_thumbnail)?;
        w.write_byte(self.y_thumbnail)?;
        w.write_bytes(&self.thumbnail)?;
        w.write_bytes(&self.extra)
    }
}

impl fmt::Display for JfifHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}[{}] {:?} version={}.{} units={} density={}x{} thumbnail={}x{}",
            self.header.marker,
            self.header.offset,
            self.header.length,
            String::from_utf8_lossy(&self.identifier),
            self.version[0],
            self.version[1],
            self.units,
            self.x_density,
            self.y_density,
            self.x_thumbnail,
            self.y_thumbnail,
        )?;
        if !self.extra.is_empty() {
            write!(f, " extra[{}]", self.extra.len())?;
        }
        write!(f, ">")
    }
}
