// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use crate::{
    container::Jfif,
    decode::decode_with_options,
    error::{Error, Result},
    options::DecodeOptions,
};

/// Convenience function which does what std::fs::write does, but also
/// creates the full directory path if it does not exist.
pub fn write_output_file(output_filename: &Path, output_bytes: &[u8]) -> Result<()> {
    let parent = output_filename
        .parent()
        .filter(|p| !p.as_os_str().is_empty());

    parent
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| fs::write(output_filename, output_bytes))
        .map_err(|source| Error::OutputWriteFailure {
            path: output_filename.to_owned(),
            source,
        })
}

impl Jfif {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_options(path, &DecodeOptions::default())
    }

    pub fn load_with_options(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::InputReadFailure {
            path: path.to_owned(),
            source,
        })?;
        decode_with_options(BufReader::new(file), options)
    }

    /// Encodes the container and writes it to `path`. The whole file is
    /// encoded in memory first, so an encoding error leaves nothing on disk.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_output_file(path.as_ref(), &bytes)
    }
}
