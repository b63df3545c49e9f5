//! Content fingerprints for cache busting
//!
//! A fingerprint is the first [`FINGERPRINT_LEN`] lowercase hex characters of
//! the SHA-256 digest of some content. It identifies a version of an asset in
//! a URL query string; it is not an integrity check.

use std::fmt;

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
pub const FINGERPRINT_LEN: usize = 12;

/// A short, deterministic digest of asset content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the fingerprint of arbitrary content.
///
/// Same bytes in, same fixed-length hex string out.
pub fn fingerprint(content: impl AsRef<[u8]>) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    let full = format!("{:x}", hasher.finalize());
    Fingerprint(full[..FINGERPRINT_LEN].to_string())
}
