// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Catalog of JPEG marker bytes.

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Every marker segment starts with this byte.
pub const MARKER_PREFIX: u8 = 0xff;

/// Marker byte following [`MARKER_PREFIX`], as listed in ITU T.81 table B.1.
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Marker {
    Tem = 0x01,

    Sof0 = 0xc0,
    Sof1 = 0xc1,
    Sof2 = 0xc2,
    Sof3 = 0xc3,
    Dht = 0xc4,
    Sof5 = 0xc5,
    Sof6 = 0xc6,
    Sof7 = 0xc7,
    Jpg = 0xc8,
    Sof9 = 0xc9,
    Sof10 = 0xca,
    Sof11 = 0xcb,
    Dac = 0xcc,
    Sof13 = 0xcd,
    Sof14 = 0xce,
    Sof15 = 0xcf,

    Rst0 = 0xd0,
    Rst1 = 0xd1,
    Rst2 = 0xd2,
    Rst3 = 0xd3,
    Rst4 = 0xd4,
    Rst5 = 0xd5,
    Rst6 = 0xd6,
    Rst7 = 0xd7,

    Soi = 0xd8,
    Eoi = 0xd9,
    Sos = 0xda,
    Dqt = 0xdb,
    Dnl = 0xdc,
    Dri = 0xdd,
    Dhp = 0xde,
    Exp = 0xdf,

    App0 = 0xe0,
    App1 = 0xe1,
    App2 = 0xe2,
    App3 = 0xe3,
    App4 = 0xe4,
    App5 = 0xe5,
    App6 = 0xe6,
    App7 = 0xe7,
    App8 = 0xe8,
    App9 = 0xe9,
    App10 = 0xea,
    App11 = 0xeb,
    App12 = 0xec,
    App13 = 0xed,
    App14 = 0xee,
    App15 = 0xef,

    Jpg0 = 0xf0,
    Jpg13 = 0xfd,
    Com = 0xfe,
}

/// Group of markers that share one segment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerFamily {
    StartOfImage,
    EndOfImage,
    /// APP0, the JFIF header.
    Jfif,
    /// APP1 to APP15.
    Application,
    QuantizationTable,
    StartOfFrame,
    HuffmanTable,
    StartOfScan,
}

impl MarkerFamily {
    /// Whether segments of this family carry a 16-bit length after the marker.
    pub fn has_length(self) -> bool {
        !matches!(self, MarkerFamily::StartOfImage | MarkerFamily::EndOfImage)
    }
}

impl Marker {
    /// Looks up a marker byte. Bytes that JPEG does not assign return `None`.
    pub fn from_byte(byte: u8) -> Option<Marker> {
        Marker::from_u8(byte)
    }

    pub fn byte(self) -> u8 {
        self as u8
    }

    /// The segment family this marker is decoded as. Markers that are known by
    /// name but that the decoder does not handle return `None`.
    pub fn family(self) -> Option<MarkerFamily> {
        use Marker::*;
        match self {
            Soi => Some(MarkerFamily::StartOfImage),
            Eoi => Some(MarkerFamily::EndOfImage),
            App0 => Some(MarkerFamily::Jfif),
            App1 | App2 | App3 | App4 | App5 | App6 | App7 | App8 | App9 | App10 | App11
            | App12 | App13 | App14 | App15 => Some(MarkerFamily::Application),
            Dqt => Some(MarkerFamily::QuantizationTable),
            Sof0 | Sof1 | Sof2 | Sof3 | Sof5 | Sof6 | Sof7 | Sof9 | Sof10 | Sof11 | Sof13
            | Sof14 | Sof15 => Some(MarkerFamily::StartOfFrame),
            Dht => Some(MarkerFamily::HuffmanTable),
            Sos => Some(MarkerFamily::StartOfScan),
            Tem | Jpg | Dac | Rst0 | Rst1 | Rst2 | Rst3 | Rst4 | Rst5 | Rst6 | Rst7 | Dnl
            | Dri | Dhp | Exp | Jpg0 | Jpg13 | Com => None,
        }
    }

    pub fn is_restart(self) -> bool {
        (0xd0..=0xd7).contains(&self.byte())
    }

    pub fn name(self) -> &'static str {
        use Marker::*;
        match self {
            Tem => "TEM",
            Sof0 => "SOF0",
            Sof1 => "SOF1",
            Sof2 => "SOF2",
            Sof3 => "SOF3",
            Dht => "DHT",
            Sof5 => "SOF5",
            Sof6 => "SOF6",
            Sof7 => "SOF7",
            Jpg => "JPG",
            Sof9 => "SOF9",
            Sof10 => "SOF10",
            Sof11 => "SOF11",
            Dac => "DAC",
            Sof13 => "SOF13",
            Sof14 => "SOF14",
            Sof15 => "SOF15",
            Rst0 => "RST0",
            Rst1 => "RST1",
            Rst2 => "RST2",
            Rst3 => "RST3",
            Rst4 => "RST4",
            Rst5 => "RST5",
            Rst6 => "RST6",
            Rst7 => "RST7",
            Soi => "SOI",
            Eoi => "EOI",
            Sos => "SOS",
            Dqt => "DQT",
            Dnl => "DNL",
            Dri => "DRI",
            Dhp => "DHP",
            Exp => "EXP",
            App0 => "APP0",
            App1 => "APP1",
            App2 => "APP2",
            App3 => "APP3",
            App4 => "APP4",
            App5 => "APP5",
            App6 => "APP6",
            App7 => "APP7",
            App8 => "APP8",
            App9 => "APP9",
            App10 => "APP10",
            App11 => "APP11",
            App12 => "APP12",
            App13 => "APP13",
            App14 => "APP14",
            App15 => "APP15",
            Jpg0 => "JPG0",
            Jpg13 => "JPG13",
            Com => "COM",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of a raw marker byte for diagnostics, `"?"` when it is not a marker.
pub fn marker_name(byte: u8) -> &'static str {
    Marker::from_byte(byte).map_or("?", Marker::name)
}
