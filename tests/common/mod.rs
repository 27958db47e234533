// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![allow(dead_code)]

pub const SOI: [u8; 2] = [0xff, 0xd8];
pub const EOI: [u8; 2] = [0xff, 0xd9];

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let length = u16::try_from(payload.len() + 2).unwrap();
    let mut out = vec![0xff, marker];
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

pub fn app0_with_thumbnail(x: u8, y: u8) -> Vec<u8> {
    let mut payload = b"JFIF\0".to_vec();
    payload.extend_from_slice(&[1, 2, 0, 0, 1, 0, 1, x, y]);
    payload.extend((0..3 * x as usize * y as usize).map(|i| i as u8));
    segment(0xe0, &payload)
}

pub fn dht(info: u8, symbols: &[u8]) -> Vec<u8> {
    let mut counts = [0u8; 16];
    let mut left = symbols.len();
    for c in counts.iter_mut().skip(1) {
        let n = left.min(255);
        *c = n as u8;
        left -= n;
    }
    let mut payload = vec![info];
    payload.extend_from_slice(&counts);
    payload.extend_from_slice(symbols);
    segment(0xc4, &payload)
}

/// SOF with big-endian dimensions and `components` components.
pub fn sof(marker: u8, width: u16, height: u16, components: u8) -> Vec<u8> {
    let mut payload = vec![8];
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&width.to_be_bytes());
    payload.push(components);
    for id in 1..=components {
        payload.extend_from_slice(&[id, 0x22, 0]);
    }
    segment(marker, &payload)
}

pub fn sos(components: &[u8], spectral: [u8; 3]) -> Vec<u8> {
    let mut payload = vec![components.len() as u8];
    for &id in components {
        payload.extend_from_slice(&[id, 0x00]);
    }
    payload.extend_from_slice(&spectral);
    segment(0xda, &payload)
}

/// A progressive-style file: several scans separated by tables, with byte
/// stuffing and restart markers in the entropy-coded data.
pub fn progressive_jpeg() -> Vec<u8> {
    let mut out = SOI.to_vec();
    out.extend(app0_with_thumbnail(2, 2));
    out.extend(segment(0xe1, b"Exif\0\0MM\0*\0\0\0\x08\0\0"));
    out.extend(segment(0xe2, b"ICC_PROFILE\0\x01\x01"));
    out.extend(segment(0xdb, &[0x00; 65]));
    out.extend(segment(0xdb, &[0x01; 65]));
    out.extend(sof(0xc2, 320, 200, 3));
    out.extend(dht(0x00, &[0, 1, 2]));
    out.extend(dht(0x10, &(0..=200).collect::<Vec<u8>>()));
    out.extend(sos(&[1, 2, 3], [0, 0, 1]));
    out.extend_from_slice(&[0x12, 0xff, 0x00, 0x34, 0xff, 0xd1, 0x56]);
    // Tables and the next scan header are part of the first scan's data.
    out.extend(dht(0x11, &[7, 8]));
    out.extend(sos(&[1], [1, 5, 0x10]));
    out.extend_from_slice(&[0xff, 0xff, 0xab, 0xff, 0x00]);
    out.extend_from_slice(&EOI);
    out
}
