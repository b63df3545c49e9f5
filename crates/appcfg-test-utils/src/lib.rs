//! Shared test utilities for the appcfg workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for temporary web projects
//! - [`fakes`]: in-memory collaborators for the plugin lifecycle

pub mod fakes;
pub mod project;

pub use fakes::{FailingLoader, StaticLoader, StaticPackage};
pub use project::TestProject;
