use std::fmt;

use base64::{prelude::BASE64_STANDARD, Engine};

use crate::{alphabet, length::Length};

/// A generated secret together with its base64 rendering.
#[derive(Debug)]
pub(crate) struct Secret {
    length: Length,
    raw: String,
    encoded: String,
}

impl Secret {
    pub(crate) fn new(length: Length, raw: String) -> Self {
        debug_assert!(raw.chars().all(alphabet::contains));
        let encoded = BASE64_STANDARD.encode(raw.as_bytes());
        Self {
            length,
            raw,
            encoded,
        }
    }

    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Random of length {} is:", self.length)?;
        writeln!(formatter, "{}", self.raw())?;
        writeln!(formatter, "encoded:")?;
        writeln!(formatter, "{}", self.encoded())
    }
}
