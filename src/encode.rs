// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::io::Write;

use crate::{
    byte_io::io_error,
    container::Jfif,
    error::{Error, Result},
    segment::SegmentFields,
};

/// Writes every segment of `jfif` in order. Declared lengths are written as
/// they are; each segment is validated first and an inconsistent one fails
/// with [`Error::InvalidSegment`].
pub fn encode<W: Write>(jfif: &Jfif, mut writer: W) -> Result<()> {
    for segment in jfif.segments() {
        if !segment.validate() {
            return Err(Error::InvalidSegment {
                offset: segment.offset(),
                marker: segment.marker(),
            });
        }
        segment.write(&mut writer)?;
    }
    writer.flush().map_err(|e| io_error("flushing", e))
}

impl Jfif {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len() as usize);
        encode(self, &mut out)?;
        Ok(out)
    }
}
