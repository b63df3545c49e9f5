//! Filesystem and hashing primitives for the app config plugin
//!
//! Provides the content fingerprint used for cache busting, normalized
//! paths for project roots and output directories, atomic asset writes,
//! and a format-agnostic options loader.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use fingerprint::{FINGERPRINT_LEN, Fingerprint, fingerprint};
pub use path::{NormalizedPath, is_contained_name};
