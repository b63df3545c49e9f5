//! The app config plugin and its mode gate
//!
//! In development the plugin registers nothing but its name. In a build it
//! runs three hooks in host order:
//!
//! 1. `config-resolved`: resolve the configuration and build the asset text
//! 2. `transform-index-html`: reference the asset from each entry document
//! 3. `generate-bundle`: emit the asset under the referenced name

use std::fmt;

use appcfg_env::{EnvironmentLoader, PackageReader, ResolvedEnv};
use serde::{Deserialize, Serialize};

use crate::console;
use crate::context::BuildContext;
use crate::emit::{AssetSink, EmitReport, EmittedAsset};
use crate::error::{Error, Result};
use crate::html::{HtmlTag, HtmlTransform};
use crate::naming::derive_variable_name;
use crate::options::PluginOptions;
use crate::phase::{Phase, Resolution};
use crate::reference::AssetReference;
use crate::source::ConfigSource;

/// Name the plugin registers with the host
pub const PLUGIN_NAME: &str = "app-config";

/// Lifecycle hooks the plugin can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hook {
    ConfigResolved,
    TransformIndexHtml,
    GenerateBundle,
}

impl Hook {
    /// Every hook, in the order the host runs them
    pub const ALL: &'static [Hook] = &[
        Hook::ConfigResolved,
        Hook::TransformIndexHtml,
        Hook::GenerateBundle,
    ];
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigResolved => write!(f, "config-resolved"),
            Self::TransformIndexHtml => write!(f, "transform-index-html"),
            Self::GenerateBundle => write!(f, "generate-bundle"),
        }
    }
}

/// The plugin, gated on build mode once at construction.
#[derive(Debug, Clone)]
pub enum AppConfigPlugin {
    /// Development pass: name only, no hooks
    Dev,
    /// Production build: all hooks registered
    Build(BuildPlugin),
}

impl AppConfigPlugin {
    /// Create the plugin for a build invocation.
    ///
    /// In build mode the package version is read up front; a reader failure
    /// fails construction. In dev mode no collaborator is touched.
    pub async fn new(
        context: &BuildContext,
        options: PluginOptions,
        packages: &dyn PackageReader,
    ) -> Result<Self> {
        if !context.is_build_mode() {
            tracing::debug!(plugin = PLUGIN_NAME, "dev mode, registering name only");
            return Ok(Self::Dev);
        }

        options.validate()?;
        let version = packages.read_version(context.project_root()).await?;
        tracing::debug!(plugin = PLUGIN_NAME, %version, "build mode, registering hooks");
        Ok(Self::Build(BuildPlugin::new(options, version)))
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Hooks registered with the host.
    pub fn hooks(&self) -> &'static [Hook] {
        match self {
            Self::Dev => &[],
            Self::Build(_) => Hook::ALL,
        }
    }

    pub fn is_build(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    pub fn as_build(&self) -> Option<&BuildPlugin> {
        match self {
            Self::Dev => None,
            Self::Build(plugin) => Some(plugin),
        }
    }

    pub fn as_build_mut(&mut self) -> Option<&mut BuildPlugin> {
        match self {
            Self::Dev => None,
            Self::Build(plugin) => Some(plugin),
        }
    }
}

/// Build-mode plugin state.
///
/// The resolver and emitter take `&mut self`; the HTML rewriter takes
/// `&self` and may run for many documents concurrently.
#[derive(Debug, Clone)]
pub struct BuildPlugin {
    options: PluginOptions,
    version: String,
    phase: Phase,
}

impl BuildPlugin {
    pub fn new(options: PluginOptions, version: impl Into<String>) -> Self {
        Self {
            options,
            version: version.into(),
            phase: Phase::Uninitialized,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The `config-resolved` hook.
    ///
    /// Starts a new build. On failure the plugin is left unresolved so that
    /// later hooks fail fast instead of publishing stale state.
    pub async fn config_resolved(
        &mut self,
        env: &ResolvedEnv,
        loader: &dyn EnvironmentLoader,
    ) -> Result<()> {
        self.phase = Phase::Uninitialized;

        let title = env.app_title(&self.options.title_key);
        let variable = derive_variable_name(title);
        let config = loader.load().await?;
        let source = ConfigSource::build(&variable, &config)?;

        tracing::debug!(
            %variable,
            keys = config.len(),
            bytes = source.len(),
            base = %env.base,
            "configuration resolved"
        );

        self.phase = Phase::Resolved(Resolution {
            base: env.base.clone(),
            variable,
            source,
        });
        Ok(())
    }

    fn resolution(&self, hook: Hook) -> Result<&Resolution> {
        self.phase.resolution().ok_or(Error::NotResolved { hook })
    }

    /// Public URL of the configuration asset for the current build.
    pub fn asset_reference(&self) -> Result<AssetReference> {
        let resolution = self.resolution(Hook::TransformIndexHtml)?;
        Ok(AssetReference::new(
            &resolution.base,
            &self.options.file_name,
            &self.version,
            &resolution.source,
        ))
    }

    /// The `transform-index-html` hook.
    ///
    /// Returns the document untouched plus one script tag referencing the
    /// asset.
    pub fn transform_index_html(&self, html: &str) -> Result<HtmlTransform> {
        let reference = self.asset_reference()?;
        tracing::debug!(src = %reference, "injecting configuration script");
        Ok(HtmlTransform {
            html: html.to_string(),
            tags: vec![HtmlTag::script(
                reference.to_string(),
                self.options.inject_to,
            )],
        })
    }

    /// The `generate-bundle` hook.
    ///
    /// Emits the asset exactly once per build. A sink failure is logged and
    /// reported, never returned as an error.
    pub fn generate_bundle(&mut self, sink: &mut dyn AssetSink) -> Result<EmitReport> {
        let resolution = match &self.phase {
            Phase::Uninitialized => {
                return Err(Error::NotResolved {
                    hook: Hook::GenerateBundle,
                });
            }
            Phase::Emitted(_) => return Err(Error::AlreadyEmitted),
            Phase::Resolved(resolution) => resolution,
        };

        let file_name = self.options.file_name.clone();
        let asset = EmittedAsset::new(&file_name, resolution.source.as_str());
        let bytes = asset.source.len();

        let report = match sink.emit_asset(asset) {
            Ok(()) => {
                tracing::info!(file = %file_name, bytes, "configuration asset emitted");
                console::print_emit_success(&file_name);
                EmitReport::Emitted { file_name, bytes }
            }
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "configuration asset emission failed");
                console::print_emit_failure(&file_name, &e);
                EmitReport::Failed {
                    file_name,
                    reason: e.to_string(),
                }
            }
        };

        self.phase = std::mem::take(&mut self.phase).into_emitted();
        Ok(report)
    }
}
