//! Module links: an opaque hex key with an optional version suffix.

use serde::{Deserialize, Serialize};

use crate::constants::KEY_HEX_LEN;
use crate::error::{Error, Result};

/// URL scheme used when presenting module keys.
pub const SCHEME: &str = "mod://";

/// A reference to a module, optionally pinned to a version.
///
/// Accepted textual forms are `KEY`, `KEY+VERSION`, `mod://KEY` and
/// `mod://KEY+VERSION`, where `KEY` is 64 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleLink {
    /// The module key, 64 lowercase hex characters.
    pub key: String,
    /// Pinned version, if any.
    pub version: Option<u64>,
}

impl ModuleLink {
    /// Create an unversioned link. The key is lowercased but not validated;
    /// use [`ModuleLink::parse`] for untrusted input.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            version: None,
        }
    }

    /// Pin this link to a version.
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    /// Parse a link from user input.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let rest = trimmed.strip_prefix(SCHEME).unwrap_or(trimmed);

        let (key, version) = match rest.split_once('+') {
            Some((key, version)) => {
                let version = version
                    .parse::<u64>()
                    .map_err(|_| Error::InvalidLink(input.to_string()))?;
                (key, Some(version))
            }
            None => (rest, None),
        };

        let key = key.to_lowercase();
        if key.len() != KEY_HEX_LEN || !key.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidLink(input.to_string()));
        }

        Ok(Self { key, version })
    }

    /// The `KEY` or `KEY+VERSION` form, without scheme. This is the form
    /// stored in `follows` and `contents` lists.
    pub fn versioned_key(&self) -> String {
        match self.version {
            Some(version) => format!("{}+{}", self.key, version),
            None => self.key.clone(),
        }
    }
}

impl std::fmt::Display for ModuleLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", SCHEME, self.versioned_key())
    }
}

impl std::str::FromStr for ModuleLink {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Present a raw key as a `mod://` url.
pub fn present_url(key: &str) -> String {
    format!("{}{}", SCHEME, key)
}
