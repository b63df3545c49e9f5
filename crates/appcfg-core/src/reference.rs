//! Public URL of the configuration asset

use std::fmt;

use appcfg_fs::Fingerprint;

use crate::source::ConfigSource;

/// Guarantee a trailing `/` on a public base path. An empty base becomes `/`.
pub fn normalize_base(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// `{base}{file_name}?v={version}-{fingerprint}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    base: String,
    file_name: String,
    version: String,
    fingerprint: Fingerprint,
}

impl AssetReference {
    pub fn new(base: &str, file_name: &str, version: &str, source: &ConfigSource) -> Self {
        Self {
            base: normalize_base(base),
            file_name: file_name.to_string(),
            version: version.to_string(),
            fingerprint: source.fingerprint(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}?v={}-{}",
            self.base, self.file_name, self.version, self.fingerprint
        )
    }
}
