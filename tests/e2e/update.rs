//! Tests for `vendorup update`

use super::{stderr, stdout, TestContext};
use std::fs;

#[tokio::test(flavor = "multi_thread")]
async fn test_update_replaces_package() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/zlib", "madler", "zlib", "v1.2");
    ctx.mock_release(
        "madler",
        "zlib",
        "v1.3",
        &[("zlib.c", "int z;\n"), ("include/zlib.h", "#pragma once\n")],
    )
    .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&package).arg("--yes");
    let output = ctx.run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Updated zlib to v1.3"));

    assert!(package.join("zlib.c").exists());
    assert!(package.join("include").join("zlib.h").exists());
    assert!(!package.join("old.c").exists());

    let metadata = fs::read_to_string(package.join("METADATA.yaml")).unwrap();
    assert!(metadata.contains("v1.3"));
    assert!(!metadata.contains("v1.2"));
    assert!(metadata.contains("/downloads/zlib-v1.3.tar.gz"));
    assert!(metadata.contains("https://zlib.example.org"));
    assert!(metadata.contains("last_upgrade_date"));

    assert_eq!(ctx.work_dir_entries(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_skips_when_up_to_date() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/lib", "acme", "lib", "2.0");
    ctx.mock_release("acme", "lib", "2.0", &[("lib.c", "int l;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&package).arg("--yes");
    let output = ctx.run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("already up to date"));
    assert!(package.join("old.c").exists());
    assert!(!package.join("lib.c").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_force_reinstalls_same_version() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/lib", "acme", "lib", "2.0");
    ctx.mock_release("acme", "lib", "2.0", &[("lib.c", "int l;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&package).arg("--yes").arg("--force");
    let output = ctx.run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(package.join("lib.c").exists());
    assert!(!package.join("old.c").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_without_confirmation_leaves_package() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/lib", "acme", "lib", "1.0");
    ctx.mock_release("acme", "lib", "1.1", &[("lib.c", "int l;\n")])
        .await;

    // No terminal to confirm on, so the prompt fails before anything changes
    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&package);
    let output = ctx.run(cmd).await;

    assert!(!output.status.success());
    assert!(package.join("old.c").exists());
    let metadata = fs::read_to_string(package.join("METADATA.yaml")).unwrap();
    assert!(metadata.contains("1.0"));
    assert!(!metadata.contains("1.1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_missing_directory() {
    let ctx = TestContext::new().await;
    let missing = ctx.temp.path().join("vendor").join("nope");

    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&missing).arg("--yes");
    let output = ctx.run(cmd).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Package directory not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_download_failure_cleans_up() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/lib", "acme", "lib", "1.0");

    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/repos/acme/lib/releases/latest"))
        .respond_with(
            wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag_name": "1.1",
                "assets": [{
                    "browser_download_url": format!("{}/downloads/lib-1.1.zip", ctx.server.uri()),
                    "size": 10
                }]
            })),
        )
        .mount(&ctx.server)
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("update").arg(&package).arg("--yes");
    let output = ctx.run(cmd).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Download failed"));
    assert!(package.join("old.c").exists());
    assert_eq!(ctx.work_dir_entries(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_from_inside_package_directory() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/zlib", "madler", "zlib", "v1.2");
    ctx.mock_release("madler", "zlib", "v1.3", &[("zlib.c", "int z;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.current_dir(&package).arg("update").arg(".").arg("--yes");
    let output = ctx.run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(package.join("zlib.c").exists());
    assert!(!package.join("old.c").exists());
    let metadata = fs::read_to_string(package.join("METADATA.yaml")).unwrap();
    assert!(metadata.contains("v1.3"));
    assert_eq!(ctx.work_dir_entries(), 0);
}
