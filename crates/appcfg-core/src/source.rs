//! The executable configuration asset
//!
//! The asset is a single-line script:
//!
//! ```text
//! window.<VAR>=<JSON>;Object.freeze(window.<VAR>);Object.defineProperty(window,"<VAR>",{configurable:false,writable:false});
//! ```
//!
//! The JSON is written by a compact serializer, which never puts whitespace
//! outside string literals, and the surrounding statements are written
//! without whitespace. Nothing is stripped afterwards, so string values keep
//! their spaces and newlines.

use std::fmt;

use appcfg_env::ResolvedConfig;
use appcfg_fs::{Fingerprint, fingerprint};

use crate::Result;
use crate::naming::VariableName;

/// Text of the configuration asset. Built once per build, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource(String);

impl ConfigSource {
    /// Serialize `config` into an asset publishing it as `window.<variable>`.
    pub fn build(variable: &VariableName, config: &ResolvedConfig) -> Result<Self> {
        let json = serde_json::to_string(config)?;
        let mut source = format!("window.{variable}={json};");
        source.push_str(&freeze_statements(variable));
        Ok(Self(source))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cache-busting fingerprint of the asset bytes.
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(&self.0)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConfigSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Statements following the assignment that make the global immutable.
pub(crate) fn freeze_statements(variable: &VariableName) -> String {
    format!(
        "Object.freeze(window.{variable});Object.defineProperty(window,\"{variable}\",{{configurable:false,writable:false}});"
    )
}
