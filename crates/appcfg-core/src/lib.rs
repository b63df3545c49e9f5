//! App config bundler plugin
//!
//! Publishes the build-time application configuration as a standalone
//! script asset, so one build can be redeployed against different
//! environments by replacing a single file.
//!
//! The plugin works in three phases driven by the host bundler:
//!
//! - **Resolve** ([`BuildPlugin::config_resolved`]): derive the global
//!   variable name from the app title and serialize the configuration
//! - **Rewrite** ([`BuildPlugin::transform_index_html`]): inject
//!   `<script src="{base}{file}?v={version}-{fingerprint}">` into each entry
//!   document
//! - **Emit** ([`BuildPlugin::generate_bundle`]): add the asset to the bundle;
//!   failure is logged and reported, never fatal
//!
//! In development ([`AppConfigPlugin::Dev`]) the plugin does nothing.
//! [`BuildDriver`] runs all three phases for a set of entry documents.

pub mod console;
pub mod context;
pub mod driver;
pub mod emit;
pub mod error;
pub mod html;
pub mod logging;
pub mod naming;
pub mod options;
pub mod phase;
pub mod plugin;
pub mod reference;
pub mod runtime;
pub mod source;

pub use context::BuildContext;
pub use driver::{BuildDriver, BuildOutput, EntryDocument};
pub use emit::{AssetSink, Bundle, EmitReport, EmittedAsset, OutDir};
pub use error::{Error, Result};
pub use html::{HtmlTag, HtmlTransform, InjectTo};
pub use naming::{VariableName, derive_variable_name};
pub use options::{DEFAULT_FILE_NAME, PluginOptions};
pub use phase::{Phase, Resolution};
pub use plugin::{AppConfigPlugin, BuildPlugin, Hook, PLUGIN_NAME};
pub use reference::{AssetReference, normalize_base};
pub use runtime::AppConfig;
pub use source::ConfigSource;
