//! Error types for appcfg-env

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] appcfg_fs::Error),

    #[error("Failed to parse environment file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    #[error("Failed to read package descriptor {path}: {message}")]
    PackageJson { path: PathBuf, message: String },

    #[error("Environment loader failed: {message}")]
    Loader { message: String },
}
