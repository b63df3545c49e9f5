//! Plugin options
//!
//! Every field has a default, so an absent options file or an empty table
//! yields the stock behavior.

use appcfg_env::DEFAULT_TITLE_KEY;
use appcfg_fs::{ConfigStore, NormalizedPath, is_contained_name};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::html::InjectTo;

/// File name of the emitted configuration asset
pub const DEFAULT_FILE_NAME: &str = "_app.config.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Asset file name, shared by the HTML reference and the emitted asset
    pub file_name: String,
    /// Environment key holding the application title
    pub title_key: String,
    /// Where the script tag is placed in each entry document
    pub inject_to: InjectTo,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            title_key: DEFAULT_TITLE_KEY.to_string(),
            inject_to: InjectTo::default(),
        }
    }
}

impl PluginOptions {
    /// Load options from a `.toml`, `.json` or `.yaml` file, falling back to
    /// defaults when the file does not exist.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let options: Self = ConfigStore::new().load_or_default(path)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_inject_to(mut self, inject_to: InjectTo) -> Self {
        self.inject_to = inject_to;
        self
    }

    /// Reject file names that cannot appear verbatim in a URL path and as an
    /// asset name.
    pub fn validate(&self) -> Result<()> {
        let name = &self.file_name;
        if name.is_empty() {
            return Err(Error::InvalidOptions {
                message: "file_name must not be empty".to_string(),
            });
        }
        if let Some(bad) = name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '"' | '<' | '>' | '\\'))
        {
            return Err(Error::InvalidOptions {
                message: format!("file_name {name:?} contains {bad:?}"),
            });
        }
        if !is_contained_name(name) {
            return Err(Error::InvalidOptions {
                message: format!("file_name {name:?} must name a file inside the output directory"),
            });
        }
        if self.title_key.is_empty() {
            return Err(Error::InvalidOptions {
                message: "title_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
