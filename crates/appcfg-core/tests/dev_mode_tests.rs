//! Tests for the development-mode gate

use appcfg_core::{
    AppConfigPlugin, BuildContext, BuildDriver, Bundle, EntryDocument, PluginOptions,
};
use appcfg_env::ResolvedEnv;
use appcfg_test_utils::project::INDEX_HTML;
use appcfg_test_utils::{StaticLoader, StaticPackage, TestProject};
use serde_json::json;

#[tokio::test]
async fn test_dev_plugin_has_name_only() {
    let plugin = AppConfigPlugin::new(
        &BuildContext::dev("/project"),
        PluginOptions::default(),
        &StaticPackage::new("1.0.0"),
    )
    .await
    .unwrap();

    assert_eq!(plugin.name(), "app-config");
    assert!(plugin.hooks().is_empty());
    assert!(!plugin.is_build());
}

#[tokio::test]
async fn test_dev_plugin_ignores_invalid_options() {
    let plugin = AppConfigPlugin::new(
        &BuildContext::dev("/project"),
        PluginOptions::default().with_file_name(""),
        &StaticPackage::new("1.0.0"),
    )
    .await;

    assert!(matches!(plugin, Ok(AppConfigPlugin::Dev)));
}

#[tokio::test]
async fn test_dev_plugin_does_not_read_package_json() {
    // package.json is malformed, which would fail a build-mode plugin
    let project = TestProject::new().with_file("package.json", "{ not json");
    let context = BuildContext::dev(project.normalized_root());

    let plugin = AppConfigPlugin::new(
        &context,
        PluginOptions::default(),
        &appcfg_env::PackageJsonReader,
    )
    .await;
    assert!(plugin.is_ok());

    let build = AppConfigPlugin::new(
        &BuildContext::build(project.normalized_root()),
        PluginOptions::default(),
        &appcfg_env::PackageJsonReader,
    )
    .await;
    assert!(build.is_err());
}

#[tokio::test]
async fn test_dev_build_leaves_documents_and_bundle_untouched() {
    let mut plugin = AppConfigPlugin::new(
        &BuildContext::dev("/project"),
        PluginOptions::default(),
        &StaticPackage::new("1.0.0"),
    )
    .await
    .unwrap();
    let loader = StaticLoader::from_json(json!({"apiUrl": "https://x"}));
    let driver = BuildDriver::new(
        ResolvedEnv::new("/").with_var("VITE_GLOB_APP_TITLE", "Demo"),
        &loader,
    );
    let mut bundle = Bundle::new();

    let output = driver
        .run(
            &mut plugin,
            vec![EntryDocument::new("index.html", INDEX_HTML)],
            &mut bundle,
        )
        .await
        .unwrap();

    assert_eq!(output.documents[0].html, INDEX_HTML);
    assert!(output.emit.is_none());
    assert!(bundle.is_empty());
    assert_eq!(loader.calls(), 0);
}
