//! [`TestProject`] builder for web projects the plugin builds.

use std::fs;
use std::path::Path;

use appcfg_fs::NormalizedPath;
use tempfile::TempDir;

/// Minimal entry document used by most scenarios
pub const INDEX_HTML: &str = "<!DOCTYPE html>\n<html>\n  <head>\n    <title>App</title>\n  </head>\n  <body>\n    <div id=\"app\"></div>\n  </body>\n</html>\n";

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use appcfg_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_package_version("1.0.0")
///     .with_env_file(".env", "VITE_GLOB_APP_TITLE=Demo\n");
/// project.assert_file_exists("package.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write a `package.json` declaring `version`.
    pub fn with_package_version(self, version: &str) -> Self {
        let descriptor = serde_json::json!({
            "name": "test-web-app",
            "private": true,
            "version": version,
        });
        self.with_file("package.json", &descriptor.to_string())
    }

    /// Write a dotenv file such as `.env` or `.env.production`.
    pub fn with_env_file(self, name: &str, content: &str) -> Self {
        self.with_file(name, content)
    }

    /// Write an arbitrary file relative to the root, creating parents.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let full_path = self.root().join(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestProject: failed to write {relative}: {e}"));
        self
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let full_path = self.root().join(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the project root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
