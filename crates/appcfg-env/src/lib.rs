//! Build-environment collaborators for the app config plugin.
//!
//! The plugin core never reads files or process state itself. It consumes:
//!
//! - an [`EnvironmentLoader`] producing the [`ResolvedConfig`] to publish,
//! - a [`PackageReader`] producing the package version used for cache busting,
//! - the [`ResolvedEnv`] handed over by the host when its configuration is final.
//!
//! [`DotenvLoader`] and [`PackageJsonReader`] are the file-backed
//! implementations used by real builds.

pub mod dotenv;
pub mod env;
pub mod error;
pub mod package;

pub use dotenv::{DEFAULT_MODE, DEFAULT_PREFIX, DotenvLoader};
pub use env::{DEFAULT_TITLE_KEY, EnvironmentLoader, ResolvedConfig, ResolvedEnv};
pub use error::{Error, Result};
pub use package::{PackageJsonReader, PackageReader};
