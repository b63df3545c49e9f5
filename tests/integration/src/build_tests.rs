//! End-to-end builds of a temporary web project
//!
//! Each test lays out a project on disk (`package.json`, dotenv files, an
//! entry document), runs the plugin through the driver and inspects `dist/`.

use std::sync::LazyLock;

use appcfg_core::{
    AppConfig, AppConfigPlugin, BuildContext, BuildDriver, EmitReport, EntryDocument, OutDir,
    PluginOptions,
};
use appcfg_env::{DotenvLoader, PackageJsonReader, ResolvedEnv};
use appcfg_test_utils::TestProject;
use appcfg_test_utils::project::INDEX_HTML;
use pretty_assertions::assert_eq;
use regex::Regex;

static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<script src="(?P<base>[^"]*?)(?P<file>[^/"?]+)\?v=(?P<version>[^"-]*)-(?P<fp>[0-9a-f]{12})"></script>"#,
    )
    .unwrap()
});

const DEMO_ENV: &str = "VITE_GLOB_APP_TITLE=Demo\nVITE_GLOB_API_URL=https://x\nSECRET_TOKEN=hunter2\n";

/// Run a full production build of `project` into `dist/`.
async fn build(project: &TestProject, base: &str, options: PluginOptions) -> Option<EmitReport> {
    let root = project.normalized_root();
    let loader = DotenvLoader::new(root.clone());
    let env = ResolvedEnv::new(base).with_vars(loader.read_vars().await.unwrap());

    let context = BuildContext::build(root.clone());
    let mut plugin = AppConfigPlugin::new(&context, options, &PackageJsonReader)
        .await
        .unwrap();

    let dist = root.join("dist");
    let documents = vec![EntryDocument::new("index.html", project.read("index.html"))];
    let output = BuildDriver::new(env, &loader)
        .run(&mut plugin, documents, &mut OutDir::new(dist.clone()))
        .await
        .unwrap();
    output.write_documents(&dist).unwrap();
    output.emit
}

fn demo_project() -> TestProject {
    TestProject::new()
        .with_package_version("1.0.0")
        .with_env_file(".env", DEMO_ENV)
        .with_file("index.html", INDEX_HTML)
}

#[tokio::test]
async fn test_demo_build() {
    let project = demo_project();

    let report = build(&project, "/", PluginOptions::default()).await;
    assert!(report.unwrap().is_emitted());

    project.assert_file_exists("dist/_app.config.js");
    let asset = project.read("dist/_app.config.js");
    assert_eq!(
        asset,
        r#"window.__PRODUCTION__DEMO__CONF__={"VITE_GLOB_API_URL":"https://x","VITE_GLOB_APP_TITLE":"Demo"};Object.freeze(window.__PRODUCTION__DEMO__CONF__);Object.defineProperty(window,"__PRODUCTION__DEMO__CONF__",{configurable:false,writable:false});"#
    );

    let html = project.read("dist/index.html");
    let captures = SCRIPT_SRC.captures(&html).expect("script tag injected");
    assert_eq!(&captures["base"], "/");
    assert_eq!(&captures["file"], "_app.config.js");
    assert_eq!(&captures["version"], "1.0.0");
    assert_eq!(&captures["fp"], appcfg_fs::fingerprint(&asset).as_str());
}

#[tokio::test]
async fn test_only_prefixed_variables_are_published() {
    let project = demo_project();
    build(&project, "/", PluginOptions::default()).await;

    let config = AppConfig::from_asset(&project.read("dist/_app.config.js")).unwrap();
    assert_eq!(config.get_str("VITE_GLOB_API_URL"), Some("https://x"));
    assert_eq!(config.get("SECRET_TOKEN"), None);
    assert!(!project.read("dist/_app.config.js").contains("hunter2"));
}

#[tokio::test]
async fn test_mode_file_overrides_base_file() {
    let project = demo_project().with_env_file(
        ".env.production",
        "VITE_GLOB_API_URL=https://prod.example.com\n",
    );
    build(&project, "/", PluginOptions::default()).await;

    let config = AppConfig::from_asset(&project.read("dist/_app.config.js")).unwrap();
    assert_eq!(config.get_str("VITE_GLOB_API_URL"), Some("https://prod.example.com"));
}

#[tokio::test]
async fn test_sub_path_deployment() {
    let project = demo_project();
    build(&project, "/console", PluginOptions::default()).await;

    let html = project.read("dist/index.html");
    let captures = SCRIPT_SRC.captures(&html).unwrap();
    assert_eq!(&captures["base"], "/console/");
}

#[tokio::test]
async fn test_changed_config_changes_fingerprint_only() {
    let first = demo_project();
    build(&first, "/", PluginOptions::default()).await;

    let second = TestProject::new()
        .with_package_version("1.0.0")
        .with_env_file(".env", &DEMO_ENV.replace("https://x", "https://y"))
        .with_file("index.html", INDEX_HTML);
    build(&second, "/", PluginOptions::default()).await;

    let a = first.read("dist/index.html");
    let b = second.read("dist/index.html");
    let (a, b) = (SCRIPT_SRC.captures(&a).unwrap(), SCRIPT_SRC.captures(&b).unwrap());
    assert_eq!(&a["version"], &b["version"]);
    assert_ne!(&a["fp"], &b["fp"]);
}

#[tokio::test]
async fn test_missing_package_json_gives_empty_version() {
    let project = TestProject::new()
        .with_env_file(".env", DEMO_ENV)
        .with_file("index.html", INDEX_HTML);
    build(&project, "/", PluginOptions::default()).await;

    let html = project.read("dist/index.html");
    let captures = SCRIPT_SRC.captures(&html).unwrap();
    assert_eq!(&captures["version"], "");
}

#[tokio::test]
async fn test_untitled_project() {
    let project = TestProject::new()
        .with_package_version("0.1.0")
        .with_env_file(".env", "VITE_GLOB_API_URL=https://x\n")
        .with_file("index.html", INDEX_HTML);
    build(&project, "/", PluginOptions::default()).await;

    let config = AppConfig::from_asset(&project.read("dist/_app.config.js")).unwrap();
    assert_eq!(config.variable().as_str(), "__PRODUCTION____APP__CONF__");
}

#[tokio::test]
async fn test_custom_file_name() {
    let project = demo_project();
    build(
        &project,
        "/",
        PluginOptions::default().with_file_name("runtime-config.js"),
    )
    .await;

    project.assert_file_exists("dist/runtime-config.js");
    project.assert_file_not_exists("dist/_app.config.js");
    assert!(project
        .read("dist/index.html")
        .contains("<script src=\"/runtime-config.js?v=1.0.0-"));
}

#[tokio::test]
async fn test_dev_build_emits_nothing() {
    let project = demo_project();
    let root = project.normalized_root();
    let loader = DotenvLoader::new(root.clone());

    let context = BuildContext::dev(root.clone());
    let mut plugin = AppConfigPlugin::new(&context, PluginOptions::default(), &PackageJsonReader)
        .await
        .unwrap();
    let dist = root.join("dist");
    let output = BuildDriver::new(ResolvedEnv::new("/"), &loader)
        .run(
            &mut plugin,
            vec![EntryDocument::new("index.html", INDEX_HTML)],
            &mut OutDir::new(dist.clone()),
        )
        .await
        .unwrap();
    output.write_documents(&dist).unwrap();

    assert_eq!(project.read("dist/index.html"), INDEX_HTML);
    project.assert_file_not_exists("dist/_app.config.js");
}

#[tokio::test]
async fn test_spaced_title_from_unquoted_env_file() {
    let project = TestProject::new()
        .with_package_version("1.0.0")
        .with_env_file(".env", "VITE_GLOB_APP_TITLE = Vben Admin\nVITE_GLOB_API_URL=/api\n")
        .with_file("index.html", INDEX_HTML);

    let report = build(&project, "/", PluginOptions::default()).await;
    assert!(report.unwrap().is_emitted());

    let config = AppConfig::from_asset(&project.read("dist/_app.config.js")).unwrap();
    assert_eq!(config.variable().as_str(), "__PRODUCTION__VBEN_ADMIN__CONF__");
    assert_eq!(config.get_str("VITE_GLOB_APP_TITLE"), Some("Vben Admin"));
}
