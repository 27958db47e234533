// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Lossless reader and writer for the marker-segment structure of JPEG/JFIF
//! files.
//!
//! ```
//! # fn main() -> jfif::error::Result<()> {
//! let bytes = [0xff, 0xd8, 0xff, 0xd9];
//! let jfif = jfif::Jfif::from_bytes(&bytes)?;
//! assert_eq!(jfif.len(), 2);
//! assert_eq!(jfif.to_bytes()?, bytes);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
pub mod byte_io;
pub mod container;
pub mod decode;
pub mod encode;
pub mod error;
pub mod marker;
pub mod metadata;
pub mod options;
pub mod scan_data;
pub mod segment;
pub mod util;

pub use container::Jfif;
pub use decode::{Decoder, decode, decode_with_options};
pub use encode::encode;
pub use error::{Error, ErrorKind, Result};
pub use marker::{Marker, MarkerFamily};
pub use metadata::{Metadata, MetadataValue, Rational};
pub use options::{DecodeOptions, TrailingData};
pub use segment::{Segment, SegmentFields};
