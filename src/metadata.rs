// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Metadata injection.
//!
//! [`Jfif::inject`] accepts a set of tag values to be written into the
//! application segments. Writing them is not supported yet: the call is
//! accepted, logged and leaves the container unchanged.

use std::{collections::BTreeMap, fmt};

use crate::{container::Jfif, error::Result, util::tracing_wrappers::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Rational(Rational),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => write!(f, "{s:?}"),
            MetadataValue::Rational(r) => write!(f, "{r}"),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<Rational> for MetadataValue {
    fn from(r: Rational) -> Self {
        MetadataValue::Rational(r)
    }
}

/// Tag name to value, e.g. `"Make"` to `Text("Canon")` or `"FNumber"` to
/// `Rational(28/10)`.
pub type Metadata = BTreeMap<String, MetadataValue>;

impl Jfif {
    /// Records the request to write `metadata` into the container. The
    /// container is left unchanged.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn inject(&mut self, metadata: &Metadata) -> Result<()> {
        for (tag, value) in metadata {
            debug!(%tag, %value, "metadata injection is not supported, skipping");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::util::test::minimal_jpeg;

    #[test]
    fn display() {
        assert_eq!(Rational::new(550, 10).to_string(), "550/10");
        assert_eq!(MetadataValue::from("Canon").to_string(), "\"Canon\"");
    }

    #[test]
    fn inject_is_a_no_op() -> Result<()> {
        let bytes = minimal_jpeg();
        let mut jfif = Jfif::from_bytes(&bytes)?;
        let before = jfif.clone();
        let mut metadata = Metadata::new();
        metadata.insert("Make".into(), "Canon".into());
        metadata.insert("FNumber".into(), Rational::new(28, 10).into());
        jfif.inject(&metadata)?;
        assert_eq!(jfif, before);
        assert_eq!(jfif.to_bytes()?, bytes);
        Ok(())
    }
}
