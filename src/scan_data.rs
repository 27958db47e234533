// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Entropy-coded data following a start-of-scan header.
//!
//! The data is not decoded. It is collected byte by byte until the EOI
//! marker, with every `0xff` pair classified on the way:
//!
//! | pair            | meaning           | effect                               |
//! |-----------------|-------------------|--------------------------------------|
//! | `ff 00`         | stuffed `0xff`    | kept                                 |
//! | `ff d0`..`ff d7`| restart marker    | kept                                 |
//! | `ff ff`         | fill byte         | first byte kept, second starts a pair|
//! | `ff d9`         | EOI               | not kept, the reader is moved back   |
//! | other `ff xx`   | in-scan marker    | kept                                 |

use crate::{
    byte_io::ByteReader,
    error::{Error, Result},
    marker::{MARKER_PREFIX, Marker},
};

/// Bytes between an SOS header and the following EOI marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanData {
    pub data: Vec<u8>,
    /// Number of `ff 00` pairs.
    pub stuffed_bytes: usize,
    /// Number of RSTn markers.
    pub restart_markers: usize,
    /// Number of other markers inside the data, e.g. the tables and headers
    /// between the scans of a progressive image.
    pub embedded_markers: usize,
}

/// Reads scan data up to, but not including, the next EOI marker. On return
/// the reader is positioned on the `0xff` of that marker.
pub fn extract_scan_data<R: ByteReader>(r: &mut R, limit: Option<u64>) -> Result<ScanData> {
    let offset = r.tell()?;
    let eoi = Marker::Eoi.byte();
    let mut scan = ScanData::default();
    let mut after_prefix = false;

    loop {
        let byte = r.read_byte()?;
        if !after_prefix {
            if byte == MARKER_PREFIX {
                after_prefix = true;
            } else {
                scan.data.push(byte);
            }
        } else if byte == eoi {
            r.step_back(2)?;
            break;
        } else if byte == MARKER_PREFIX {
            scan.data.push(MARKER_PREFIX);
        } else {
            match byte {
                0x00 => scan.stuffed_bytes += 1,
                b if Marker::from_byte(b).is_some_and(Marker::is_restart) => {
                    scan.restart_markers += 1
                }
                _ => scan.embedded_markers += 1,
            }
            scan.data.extend_from_slice(&[MARKER_PREFIX, byte]);
            after_prefix = false;
        }

        if let Some(limit) = limit {
            if scan.data.len() as u64 > limit {
                return Err(Error::ScanTooLarge { offset, limit });
            }
        }
    }

    Ok(scan)
}
