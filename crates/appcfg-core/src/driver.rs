//! Lifecycle driver
//!
//! Runs the plugin's hooks in host order for one build: resolve once, rewrite
//! every entry document, then emit into the bundle.

use appcfg_env::{EnvironmentLoader, ResolvedEnv};
use appcfg_fs::{NormalizedPath, io};

use crate::emit::{AssetSink, EmitReport};
use crate::error::Result;
use crate::plugin::AppConfigPlugin;

/// An HTML entry document of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDocument {
    /// Path relative to the output directory, e.g. `index.html`
    pub name: String,
    pub html: String,
}

impl EntryDocument {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }
}

/// Result of one driven build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    /// Entry documents after tag injection, in input order
    pub documents: Vec<EntryDocument>,
    /// Emission outcome; `None` in dev mode
    pub emit: Option<EmitReport>,
}

impl BuildOutput {
    /// Write every document under `out_dir`.
    pub fn write_documents(&self, out_dir: &NormalizedPath) -> Result<()> {
        for document in &self.documents {
            let path = out_dir.join_contained(&document.name).ok_or_else(|| {
                appcfg_fs::Error::OutsideRoot {
                    path: document.name.clone(),
                }
            })?;
            io::write_text(&path, &document.html)?;
        }
        Ok(())
    }
}

/// Drives [`AppConfigPlugin`] through one build.
pub struct BuildDriver<'a> {
    env: ResolvedEnv,
    loader: &'a dyn EnvironmentLoader,
}

impl<'a> BuildDriver<'a> {
    pub fn new(env: ResolvedEnv, loader: &'a dyn EnvironmentLoader) -> Self {
        Self { env, loader }
    }

    /// Run the build.
    ///
    /// In dev mode the documents pass through untouched and nothing is
    /// loaded or emitted.
    pub async fn run(
        &self,
        plugin: &mut AppConfigPlugin,
        documents: Vec<EntryDocument>,
        sink: &mut dyn AssetSink,
    ) -> Result<BuildOutput> {
        let Some(build) = plugin.as_build_mut() else {
            tracing::debug!(documents = documents.len(), "dev build, plugin inactive");
            return Ok(BuildOutput {
                documents,
                emit: None,
            });
        };

        build.config_resolved(&self.env, self.loader).await?;

        let documents = documents
            .into_iter()
            .map(|document| {
                let html = build.transform_index_html(&document.html)?.render();
                Ok(EntryDocument {
                    name: document.name,
                    html,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let report = build.generate_bundle(sink)?;
        if !report.is_emitted() {
            tracing::warn!(
                file = report.file_name(),
                "entry documents reference a configuration asset that was not emitted"
            );
        }

        Ok(BuildOutput {
            documents,
            emit: Some(report),
        })
    }
}

impl std::fmt::Debug for BuildDriver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildDriver")
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}
