// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Default maximum size of the entropy-coded data following a single SOS
/// segment (1GB).
pub const DEFAULT_SCAN_SIZE_LIMIT: u64 = 1024 * 1024 * 1024;

/// What to do with bytes found after the EOI marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingData {
    /// Decode succeeds and the container records that trailing bytes exist.
    /// They are not kept and will not be written back.
    #[default]
    Allow,
    /// Decode fails with [`crate::error::Error::TrailingData`].
    Reject,
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub trailing_data: TrailingData,
    /// Fail decoding if the scan data after any SOS segment grows larger than
    /// this many bytes. Set to `None` to disable the limit.
    /// Default: 1GB ([`DEFAULT_SCAN_SIZE_LIMIT`])
    pub scan_size_limit: Option<u64>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trailing_data: TrailingData::Allow,
            scan_size_limit: Some(DEFAULT_SCAN_SIZE_LIMIT),
        }
    }
}

impl DecodeOptions {
    /// Options that refuse anything but a well-formed stream ending at EOI.
    pub fn strict() -> Self {
        Self {
            trailing_data: TrailingData::Reject,
            ..Self::default()
        }
    }
}
