//! The resolved build environment and the loader contract

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Environment key holding the human-readable application title
pub const DEFAULT_TITLE_KEY: &str = "VITE_GLOB_APP_TITLE";

/// Configuration published to the page, keyed in sorted order so that its
/// serialization is byte-stable.
pub type ResolvedConfig = BTreeMap<String, Value>;

/// Produces the configuration values for one build.
///
/// Called once per "configuration resolved" event. Failures propagate to the
/// host and fail the build.
#[async_trait]
pub trait EnvironmentLoader: Send + Sync {
    async fn load(&self) -> Result<ResolvedConfig>;
}

/// The host's final build environment, as seen by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnv {
    /// Public base path the application is served from (e.g. `/` or `/app`)
    pub base: String,
    /// Environment variables visible to the build
    pub vars: BTreeMap<String, String>,
}

impl ResolvedEnv {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.vars.extend(vars);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The application title stored under `key`, or `""` when unset.
    pub fn app_title(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }
}
