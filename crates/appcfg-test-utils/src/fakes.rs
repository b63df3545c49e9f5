//! In-memory collaborators.
//!
//! Use these instead of [`TestProject`](crate::TestProject) when a test only
//! exercises the plugin's lifecycle and does not care where values come from.

use std::sync::atomic::{AtomicUsize, Ordering};

use appcfg_env::{EnvironmentLoader, Error, PackageReader, ResolvedConfig, Result};
use appcfg_fs::NormalizedPath;
use async_trait::async_trait;
use serde_json::Value;

/// Loader returning a fixed configuration and counting its calls.
#[derive(Debug, Default)]
pub struct StaticLoader {
    config: ResolvedConfig,
    calls: AtomicUsize,
}

impl StaticLoader {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// Build from a JSON object literal.
    ///
    /// # Panics
    /// Panics if `value` is not a JSON object.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map.into_iter().collect()),
            other => panic!("StaticLoader::from_json expects an object, got {other}"),
        }
    }

    /// Number of times [`EnvironmentLoader::load`] ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnvironmentLoader for StaticLoader {
    async fn load(&self) -> Result<ResolvedConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.config.clone())
    }
}

/// Loader that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingLoader {
    message: String,
}

impl FailingLoader {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl EnvironmentLoader for FailingLoader {
    async fn load(&self) -> Result<ResolvedConfig> {
        Err(Error::Loader {
            message: self.message.clone(),
        })
    }
}

/// Package reader returning a fixed version.
#[derive(Debug, Clone, Default)]
pub struct StaticPackage {
    version: String,
}

impl StaticPackage {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[async_trait]
impl PackageReader for StaticPackage {
    async fn read_version(&self, _root: &NormalizedPath) -> Result<String> {
        Ok(self.version.clone())
    }
}
