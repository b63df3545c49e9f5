//! Per-build context supplied by the host

use appcfg_fs::NormalizedPath;

/// Facts about the current build invocation.
///
/// Created once by the host and only read by the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    is_build_mode: bool,
    project_root: NormalizedPath,
}

impl BuildContext {
    pub fn new(project_root: impl Into<NormalizedPath>, is_build_mode: bool) -> Self {
        Self {
            is_build_mode,
            project_root: project_root.into(),
        }
    }

    /// Context for a production bundling pass.
    pub fn build(project_root: impl Into<NormalizedPath>) -> Self {
        Self::new(project_root, true)
    }

    /// Context for a development server pass.
    pub fn dev(project_root: impl Into<NormalizedPath>) -> Self {
        Self::new(project_root, false)
    }

    pub fn is_build_mode(&self) -> bool {
        self.is_build_mode
    }

    pub fn project_root(&self) -> &NormalizedPath {
        &self.project_root
    }
}
