//! Build phase tracking
//!
//! ```text
//! Uninitialized --config-resolved--> Resolved --generate-bundle--> Emitted
//!       ^                               |                            |
//!       +------ resolution failed ------+----------------------------+
//! ```
//!
//! A new `config-resolved` event starts a new build from any phase.

use crate::naming::VariableName;
use crate::source::ConfigSource;

/// Everything the resolver computes for later hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Public base path as given by the host (not yet normalized)
    pub base: String,
    pub variable: VariableName,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Resolved(Resolution),
    Emitted(Resolution),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Resolved(_) => "resolved",
            Self::Emitted(_) => "emitted",
        }
    }

    /// The resolution, once the resolver has run for the current build.
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Uninitialized => None,
            Self::Resolved(resolution) | Self::Emitted(resolution) => Some(resolution),
        }
    }

    /// Move `Resolved` to `Emitted`; other phases are returned as-is.
    pub(crate) fn into_emitted(self) -> Self {
        match self {
            Self::Resolved(resolution) => Self::Emitted(resolution),
            other => other,
        }
    }
}
