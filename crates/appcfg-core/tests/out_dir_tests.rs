//! Tests for writing builds to an output directory

use appcfg_core::{
    AppConfig, AppConfigPlugin, BuildContext, BuildDriver, EmitReport, EntryDocument, OutDir,
    PluginOptions,
};
use appcfg_env::ResolvedEnv;
use appcfg_fs::NormalizedPath;
use appcfg_test_utils::project::INDEX_HTML;
use appcfg_test_utils::{StaticLoader, StaticPackage};
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::json;

async fn build_plugin() -> AppConfigPlugin {
    AppConfigPlugin::new(
        &BuildContext::build("/project"),
        PluginOptions::default(),
        &StaticPackage::new("1.0.0"),
    )
    .await
    .unwrap()
}

fn demo_env() -> ResolvedEnv {
    ResolvedEnv::new("/").with_var("VITE_GLOB_APP_TITLE", "Demo")
}

#[tokio::test]
async fn test_build_writes_asset_and_documents() {
    let dist = assert_fs::TempDir::new().unwrap();
    let out = NormalizedPath::new(dist.path());
    let loader = StaticLoader::from_json(json!({"apiUrl": "https://x"}));
    let mut plugin = build_plugin().await;

    let output = BuildDriver::new(demo_env(), &loader)
        .run(
            &mut plugin,
            vec![
                EntryDocument::new("index.html", INDEX_HTML),
                EntryDocument::new("admin/index.html", INDEX_HTML),
            ],
            &mut OutDir::new(out.clone()),
        )
        .await
        .unwrap();
    output.write_documents(&out).unwrap();

    let asset = dist.child("_app.config.js");
    asset.assert(predicate::path::is_file());
    asset.assert(predicate::str::starts_with(
        "window.__PRODUCTION__DEMO__CONF__=",
    ));

    let reference = plugin.as_build().unwrap().asset_reference().unwrap();
    let script = format!("<script src=\"{reference}\"></script>");
    dist.child("index.html")
        .assert(predicate::str::contains(script.as_str()));
    dist.child("admin/index.html")
        .assert(predicate::str::contains(script.as_str()));

    let written = std::fs::read_to_string(asset.path()).unwrap();
    let config = AppConfig::from_asset(&written).unwrap();
    assert_eq!(config.get_str("apiUrl"), Some("https://x"));
}

#[tokio::test]
async fn test_unwritable_asset_does_not_fail_build() {
    let dist = assert_fs::TempDir::new().unwrap();
    // A directory where the asset should go makes the write fail
    dist.child("_app.config.js").create_dir_all().unwrap();
    let loader = StaticLoader::from_json(json!({"apiUrl": "https://x"}));
    let mut plugin = build_plugin().await;

    let output = BuildDriver::new(demo_env(), &loader)
        .run(
            &mut plugin,
            vec![EntryDocument::new("index.html", INDEX_HTML)],
            &mut OutDir::new(dist.path()),
        )
        .await
        .unwrap();

    assert!(matches!(output.emit, Some(EmitReport::Failed { .. })));
    // The reference is still injected
    assert!(output.documents[0].html.contains("/_app.config.js?v=1.0.0-"));
    dist.child("_app.config.js").assert(predicate::path::is_dir());
}

#[test]
fn test_out_dir_rejects_escaping_asset_names() {
    let dist = assert_fs::TempDir::new().unwrap();
    let mut out = OutDir::new(dist.child("dist").path());

    assert!(out.write("../outside.js", "x").is_err());
    assert!(out.write("/abs.js", "x").is_err());
    dist.child("outside.js").assert(predicate::path::missing());
}

#[test]
fn test_out_dir_creates_nested_directories() {
    let dist = assert_fs::TempDir::new().unwrap();
    let mut out = OutDir::new(dist.path());

    let path = out.write("static/config/app.js", "window.x=1;").unwrap();
    assert!(path.as_str().ends_with("static/config/app.js"));
    dist.child("static/config/app.js")
        .assert(predicate::str::diff("window.x=1;"));
}
