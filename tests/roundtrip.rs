// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

mod common;

use std::io::Cursor;

use arbtest::arbitrary::Unstructured;
use common::*;
use jfif::{
    DecodeOptions, Error, ErrorKind, Jfif, Marker, Segment, SegmentFields, decode,
    decode_with_options, encode,
};

#[test]
fn progressive_round_trip() {
    let bytes = progressive_jpeg();
    let jfif = Jfif::from_bytes(&bytes).unwrap();

    let markers: Vec<Marker> = jfif.segments().iter().map(|s| s.marker()).collect();
    assert_eq!(
        markers,
        [
            Marker::Soi,
            Marker::App0,
            Marker::App1,
            Marker::App2,
            Marker::Dqt,
            Marker::Dqt,
            Marker::Sof2,
            Marker::Dht,
            Marker::Dht,
            Marker::Sos,
            Marker::Eoi,
        ]
    );
    assert_eq!(jfif.app0().unwrap().thumbnail.len(), 12);
    assert!(jfif.frame_header().unwrap().is_progressive());
    assert_eq!(jfif.frame_header().unwrap().samples_per_line(), 320);
    assert_eq!(jfif.scans().count(), 1);

    let mut out = Vec::new();
    encode(&jfif, &mut out).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn reader_by_reference() {
    let bytes = progressive_jpeg();
    let mut cursor = Cursor::new(&bytes);
    let jfif = decode(&mut cursor).unwrap();
    assert_eq!(cursor.position(), bytes.len() as u64);
    assert_eq!(jfif.encoded_len(), bytes.len() as u64);
}

#[test]
fn every_frame_type_is_accepted() {
    for marker in [
        0xc0, 0xc1, 0xc2, 0xc3, 0xc5, 0xc6, 0xc7, 0xc9, 0xca, 0xcb, 0xcd, 0xce, 0xcf,
    ] {
        let mut bytes = SOI.to_vec();
        bytes.extend(sof(marker, 1, 1, 1));
        bytes.extend_from_slice(&EOI);
        let jfif = Jfif::from_bytes(&bytes).unwrap();
        assert_eq!(jfif.segments()[1].marker().byte(), marker);
        assert_eq!(jfif.to_bytes().unwrap(), bytes);
    }
}

#[test]
fn every_application_segment_is_accepted() {
    let mut bytes = SOI.to_vec();
    for marker in 0xe1..=0xef {
        bytes.extend(segment(marker, &[marker; 3]));
    }
    bytes.extend_from_slice(&EOI);
    let jfif = Jfif::from_bytes(&bytes).unwrap();
    assert_eq!(jfif.len(), 17);
    assert!(
        jfif.segments()[1..16]
            .iter()
            .all(|s| matches!(s, Segment::Application(_)))
    );
    assert_eq!(jfif.to_bytes().unwrap(), bytes);
}

#[test]
fn empty_payloads() {
    let mut bytes = SOI.to_vec();
    bytes.extend(segment(0xe5, &[]));
    bytes.extend(segment(0xdb, &[]));
    bytes.extend_from_slice(&EOI);
    let jfif = Jfif::from_bytes(&bytes).unwrap();
    assert_eq!(jfif.segments()[1].payload(), Some(&[][..]));
    assert_eq!(jfif.segments()[2].payload(), Some(&[][..]));
    assert_eq!(jfif.to_bytes().unwrap(), bytes);
}

#[test]
fn truncated_segment() {
    let mut bytes = progressive_jpeg();
    bytes.truncate(30);
    let err = Jfif::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::Truncated { offset: 30 }));
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn invariant_violations() {
    let mut bad_units = SOI.to_vec();
    let mut app0 = app0_with_thumbnail(0, 0);
    app0[11] = 7;
    bad_units.extend(app0);
    bad_units.extend_from_slice(&EOI);
    let err = Jfif::from_bytes(&bad_units).unwrap_err();
    assert!(matches!(err, Error::InvalidDensityUnits { offset: 2, units: 7 }));
    assert_eq!(err.kind(), ErrorKind::Invariant);

    let mut overflow = SOI.to_vec();
    let mut payload = vec![0x00];
    payload.extend_from_slice(&[255; 16]);
    overflow.extend(segment(0xc4, &payload));
    overflow.extend_from_slice(&EOI);
    let err = Jfif::from_bytes(&overflow).unwrap_err();
    assert!(matches!(err, Error::HuffmanCountOverflow { sum: 4080, .. }));
    assert_eq!(err.kind(), ErrorKind::Invariant);
}

#[test]
fn scan_size_limit() {
    let bytes = progressive_jpeg();
    let mut options = DecodeOptions::default();
    options.scan_size_limit = Some(8);
    assert!(matches!(
        decode_with_options(Cursor::new(&bytes), &options),
        Err(Error::ScanTooLarge { limit: 8, .. })
    ));
    options.scan_size_limit = None;
    assert!(decode_with_options(Cursor::new(&bytes), &options).is_ok());
}

fn arbitrary_stream(u: &mut Unstructured) -> arbtest::arbitrary::Result<(Vec<u8>, usize)> {
    let mut out = SOI.to_vec();
    let mut segments = 2;
    if u.arbitrary()? {
        let x = u.int_in_range(0..=4)?;
        let y = u.int_in_range(0..=4)?;
        out.extend(app0_with_thumbnail(x, y));
        segments += 1;
    }
    for _ in 0..u.int_in_range(0..=8)? {
        let kind = u.int_in_range(0..=2)?;
        let len = u.int_in_range(0..=300)?;
        let payload = u.bytes(len)?;
        match kind {
            0 => out.extend(segment(u.int_in_range(0xe1..=0xef)?, payload)),
            1 => out.extend(segment(0xdb, payload)),
            _ => out.extend(dht(u.arbitrary()?, &payload[..len.min(256)])),
        }
        segments += 1;
    }
    if u.arbitrary()? {
        out.extend(sof(0xc0, u.arbitrary()?, u.arbitrary()?, u.int_in_range(1..=4)?));
        segments += 1;
    }
    if u.arbitrary()? {
        out.extend(sos(&[1], [0, 63, 0]));
        for _ in 0..u.int_in_range(0..=200)? {
            match u.int_in_range(0..=9)? {
                0 => out.extend_from_slice(&[0xff, 0x00]),
                1 => out.extend_from_slice(&[0xff, u.int_in_range(0xd0..=0xd7)?]),
                _ => {
                    let b: u8 = u.arbitrary()?;
                    out.push(b);
                    if b == 0xff {
                        out.push(0x00);
                    }
                }
            }
        }
        segments += 1;
    }
    out.extend_from_slice(&EOI);
    Ok((out, segments))
}

#[test]
fn arbitrary_streams_round_trip() {
    arbtest::arbtest(|u| {
        let (bytes, segments) = arbitrary_stream(u)?;
        let jfif = Jfif::from_bytes(&bytes).unwrap();
        assert_eq!(jfif.len(), segments);
        assert!(!jfif.has_trailing_data());
        assert_eq!(jfif.to_bytes().unwrap(), bytes);

        let mut offset = 0;
        for s in jfif.segments() {
            assert_eq!(s.offset(), offset);
            assert!(std::ptr::eq(jfif.segment_at_offset(offset + 1).unwrap(), s));
            offset += s.span_len();
        }
        Ok(())
    });
}

#[test]
fn arbitrary_trailers_are_not_segments() {
    arbtest::arbtest(|u| {
        let (mut bytes, segments) = arbitrary_stream(u)?;
        let end = bytes.len();
        let trailer_len = u.int_in_range(1..=64)?;
        let trailer = u.bytes(trailer_len)?;
        bytes.extend_from_slice(trailer);

        let jfif = Jfif::from_bytes(&bytes).unwrap();
        assert_eq!(jfif.len(), segments);
        assert_eq!(jfif.trailing_len(), trailer.len() as u64);
        assert_eq!(jfif.to_bytes().unwrap(), bytes[..end]);

        let err = decode_with_options(Cursor::new(&bytes), &DecodeOptions::strict()).unwrap_err();
        assert!(matches!(err, Error::TrailingData { offset, .. } if offset == end as u64));
        Ok(())
    });
}
