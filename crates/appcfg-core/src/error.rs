//! Error types for appcfg-core

use crate::plugin::Hook;

/// Result type for appcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the plugin lifecycle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hook that needs the resolved configuration ran before
    /// `config-resolved` completed
    #[error("Hook {hook} ran before the configuration was resolved")]
    NotResolved { hook: Hook },

    /// Bundle generation ran twice within one build
    #[error("Configuration asset was already emitted for this build")]
    AlreadyEmitted,

    /// Another asset already uses the configuration file name
    #[error("Asset {file_name} already exists in the bundle")]
    AssetCollision { file_name: String },

    /// Plugin options cannot produce a valid asset reference
    #[error("Invalid plugin options: {message}")]
    InvalidOptions { message: String },

    /// Text is not a configuration asset produced by this plugin
    #[error("Invalid configuration asset: {message}")]
    InvalidAsset { message: String },

    /// Environment or package collaborator failed
    #[error(transparent)]
    Env(#[from] appcfg_env::Error),

    /// Filesystem error from appcfg-fs
    #[error(transparent)]
    Fs(#[from] appcfg_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from resolving the build environment
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::Env(_))
    }
}
