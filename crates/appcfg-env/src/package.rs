//! Package descriptor (`package.json`) reader

use std::io::ErrorKind;

use appcfg_fs::NormalizedPath;
use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Reads the version of the package being built.
#[async_trait]
pub trait PackageReader: Send + Sync {
    /// The package version, or `""` when the descriptor has none.
    async fn read_version(&self, root: &NormalizedPath) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    version: Option<String>,
}

/// Reads `package.json` from the project root.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonReader;

impl PackageJsonReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PackageReader for PackageJsonReader {
    async fn read_version(&self, root: &NormalizedPath) -> Result<String> {
        let path = root.join("package.json");
        let content = match tokio::fs::read_to_string(path.to_native()).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(%path, "package.json not found, using empty version");
                return Ok(String::new());
            }
            Err(e) => return Err(appcfg_fs::Error::io(path.to_native(), e).into()),
        };

        let package: PackageJson =
            serde_json::from_str(&content).map_err(|e| Error::PackageJson {
                path: path.to_native(),
                message: e.to_string(),
            })?;

        Ok(package.version.unwrap_or_default())
    }
}
