//! Tests for `vendorup check`

use super::{stderr, stdout, TestContext};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;

#[tokio::test(flavor = "multi_thread")]
async fn test_check_reports_newer_release() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/zlib", "madler", "zlib", "v1.2");
    ctx.mock_release("madler", "zlib", "v1.3", &[("zlib.c", "int z;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("check").arg(&package);
    let output = ctx.run(cmd).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib: v1.2 → v1.3"));

    // Checking never touches the package
    assert!(package.join("old.c").exists());
    let metadata = fs::read_to_string(package.join("METADATA.yaml")).unwrap();
    assert!(metadata.contains("v1.2"));
    assert!(!metadata.contains("v1.3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_up_to_date() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/lib", "acme", "lib", "2.0");
    ctx.mock_release("acme", "lib", "2.0", &[("lib.c", "int l;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("check").arg(&package);
    let output = ctx.run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("lib: up to date (2.0)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_continues_past_failures() {
    let ctx = TestContext::new().await;
    let good = ctx.vendored_package("vendor/good", "acme", "good", "1.0");
    let missing = ctx.temp.path().join("vendor").join("missing");
    ctx.mock_release("acme", "good", "1.1", &[("good.c", "int g;\n")])
        .await;

    let mut cmd = ctx.vendorup();
    cmd.arg("check").arg(&missing).arg(&good);
    let output = ctx.run(cmd).await;

    assert!(!output.status.success());
    assert!(stdout(&output).contains("good: 1.0 → 1.1"));
    assert!(stderr(&output).contains("could not be checked"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_unknown_repository_fails() {
    let ctx = TestContext::new().await;
    let package = ctx.vendored_package("vendor/gone", "acme", "gone", "1.0");

    let mut cmd = ctx.vendorup();
    cmd.arg("check").arg(&package);
    let output = ctx.run(cmd).await;

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_package_without_github_url() {
    let ctx = TestContext::new().await;
    let package = ctx.temp.path().join("vendor").join("plain");
    fs::create_dir_all(&package).unwrap();
    fs::write(
        package.join("METADATA.yaml"),
        "name: plain\nthird_party:\n  url:\n    - kind: ARCHIVE\n      value: https://example.com/plain-1.0.tar.gz\n  version: \"1.0\"\n",
    )
    .unwrap();

    let mut cmd = ctx.vendorup();
    cmd.arg("check").arg(&package);
    let output = ctx.run(cmd).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("plain"));
}

#[test]
fn test_check_requires_a_path() {
    #[allow(deprecated)]
    let mut cmd = std::process::Command::cargo_bin("vendorup").unwrap();
    cmd.arg("check").assert().failure();
}
