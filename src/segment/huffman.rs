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

/// Number of code lengths, 1 to 16 bits.
pub const NUM_CODE_LENGTHS: usize = 16;
pub const MAX_SYMBOLS: usize = 256;

const FIXED_LEN: u16 = 1 + NUM_CODE_LENGTHS as u16;

/// A DHT segment holding a single table. The symbols are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTable {
    pub header: SegmentHeader,
    /// Table class in the high nibble, destination in the low nibble.
    pub info: u8,
    pub counts: [u8; NUM_CODE_LENGTHS],
    pub symbols: Vec<u8>,
}

impl HuffmanTable {
    pub fn parse<R: ByteReader>(r: &mut R) -> Result<Self> {
        let header = SegmentHeader::read(r, &[Marker::Dht], FIXED_LEN)?;
        let offset = header.offset;
        let info = r.read_byte()?;
        let counts = r.read_array::<NUM_CODE_LENGTHS>()?;

        let sum = symbol_count(&counts);
        if sum > MAX_SYMBOLS {
            return Err(Error::HuffmanCountOverflow { offset, sum });
        }
        let actual = header.payload_len() - FIXED_LEN as usize;
        if actual != sum {
            return Err(Error::HuffmanLengthMismatch {
                offset,
                expected: sum,
                actual,
            });
        }
        let symbols = r.read_bytes(sum)?;

        Ok(HuffmanTable {
            header,
            info,
            counts,
            symbols,
        })
    }

    /// 0 for DC tables, 1 for AC tables.
    pub fn class(&self) -> u8 {
        self.info >> 4
    }

    pub fn destination(&self) -> u8 {
        self.info & 0x0f
    }
}

fn symbol_count(counts: &[u8; NUM_CODE_LENGTHS]) -> usize {
    counts.iter().map(|&c| c as usize).sum()
}

impl SegmentFields for HuffmanTable {
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
        Some(&self.symbols)
    }

    fn validate(&self) -> bool {
        let sum = symbol_count(&self.counts);
        self.header.marker == Marker::Dht
            && sum <= MAX_SYMBOLS
            && self.symbols.len() == sum
            && self.header.payload_len() == FIXED_LEN as usize + sum
    }

    fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        self.header.write(w)?;
        w.write_byte(self.info)?;
        w.write_bytes(&self.counts)?;
        w.write_bytes(&self.symbols)
    }
}

impl fmt::Display for HuffmanTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}:{}[{}] class={} destination={} counts={:?} symbols[{}]>",
            self.header.marker,
            self.header.offset,
            self.header.length,
            self.class(),
            self.destination(),
            self.counts,
            self.symbols.len()
        )
    }
}
