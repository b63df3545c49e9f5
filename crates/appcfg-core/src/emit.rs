//! Asset emission
//!
//! The emitter hands one [`EmittedAsset`] to an [`AssetSink`]. A sink failure
//! does not fail the build; it is recorded in an [`EmitReport`] so the
//! caller can decide whether a dangling HTML reference is acceptable.

use std::collections::{BTreeMap, BTreeSet};

use appcfg_fs::{NormalizedPath, io};

use crate::error::{Error, Result};

/// A named text asset for the build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    pub file_name: String,
    pub source: String,
}

impl EmittedAsset {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }
}

/// Receives assets during bundle generation.
pub trait AssetSink {
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<()>;
}

/// Outcome of bundle generation for the configuration asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitReport {
    Emitted { file_name: String, bytes: usize },
    Failed { file_name: String, reason: String },
}

impl EmitReport {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted { .. })
    }

    pub fn file_name(&self) -> &str {
        match self {
            Self::Emitted { file_name, .. } | Self::Failed { file_name, .. } => file_name,
        }
    }
}

/// In-memory build artifact set, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    assets: BTreeMap<String, EmittedAsset>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an asset, as other plugins would before this one runs.
    pub fn with_asset(mut self, file_name: &str, source: &str) -> Self {
        self.assets
            .insert(file_name.to_string(), EmittedAsset::new(file_name, source));
        self
    }

    pub fn get(&self, file_name: &str) -> Option<&EmittedAsset> {
        self.assets.get(file_name)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSink for Bundle {
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<()> {
        if self.assets.contains_key(&asset.file_name) {
            return Err(Error::AssetCollision {
                file_name: asset.file_name,
            });
        }
        self.assets.insert(asset.file_name.clone(), asset);
        Ok(())
    }
}

/// Writes assets into an output directory.
///
/// Names emitted twice through the same sink collide; files left over from
/// a previous build are overwritten.
#[derive(Debug, Clone)]
pub struct OutDir {
    root: NormalizedPath,
    written: BTreeSet<String>,
}

impl OutDir {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            written: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Write a file relative to the output root.
    pub fn write(&mut self, file_name: &str, content: &str) -> Result<NormalizedPath> {
        let path = self
            .root
            .join_contained(file_name)
            .ok_or_else(|| appcfg_fs::Error::OutsideRoot {
                path: file_name.to_string(),
            })?;
        io::write_text(&path, content)?;
        self.written.insert(file_name.to_string());
        Ok(path)
    }
}

impl AssetSink for OutDir {
    fn emit_asset(&mut self, asset: EmittedAsset) -> Result<()> {
        if self.written.contains(&asset.file_name) {
            return Err(Error::AssetCollision {
                file_name: asset.file_name,
            });
        }
        self.write(&asset.file_name, &asset.source)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_stores_asset() {
        let mut bundle = Bundle::new();
        bundle
            .emit_asset(EmittedAsset::new("_app.config.js", "window.X={};"))
            .unwrap();
        assert_eq!(bundle.get("_app.config.js").unwrap().source, "window.X={};");
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_bundle_rejects_collision() {
        let mut bundle = Bundle::new().with_asset("_app.config.js", "other");
        let err = bundle
            .emit_asset(EmittedAsset::new("_app.config.js", "mine"))
            .unwrap_err();

        assert!(matches!(err, Error::AssetCollision { ref file_name } if file_name == "_app.config.js"));
        assert_eq!(bundle.get("_app.config.js").unwrap().source, "other");
    }

    #[test]
    fn test_report_accessors() {
        let ok = EmitReport::Emitted {
            file_name: "a.js".into(),
            bytes: 3,
        };
        let failed = EmitReport::Failed {
            file_name: "b.js".into(),
            reason: "boom".into(),
        };
        assert!(ok.is_emitted());
        assert!(!failed.is_emitted());
        assert_eq!(failed.file_name(), "b.js");
    }
}
