//! End-to-end tests for the vendorup binary
//!
//! Each test runs the compiled binary against a wiremock server standing in
//! for the GitHub API and the release download host.

use assert_cmd::prelude::*;
use assert_fs::{prelude::*, TempDir};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::path::PathBuf;
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod check;
pub mod update;

/// Test context that isolates config and cache directories per test
pub struct TestContext {
    pub temp: TempDir,
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        let temp = TempDir::new().unwrap();
        temp.child("config").create_dir_all().unwrap();
        temp.child("cache").create_dir_all().unwrap();
        temp.child("work").create_dir_all().unwrap();

        let server = MockServer::start().await;

        let config = format!(
            "github:\n  api_url: {}\n  timeout_secs: 10\nwork_dir: {}\n",
            server.uri(),
            temp.child("work").path().display()
        );
        temp.child("config/vendorup/config.yaml")
            .write_str(&config)
            .unwrap();

        Self { temp, server }
    }

    /// Command for the vendorup binary with the isolated environment
    pub fn vendorup(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vendorup").unwrap();
        cmd.current_dir(self.temp.path());
        cmd.env("XDG_CONFIG_HOME", self.temp.child("config").path());
        cmd.env("XDG_CACHE_HOME", self.temp.child("cache").path());
        cmd.env("HOME", self.temp.path());
        cmd.env_remove("GITHUB_TOKEN");
        cmd
    }

    /// Run a command without blocking the mock server
    pub async fn run(&self, mut cmd: Command) -> Output {
        tokio::task::spawn_blocking(move || cmd.output().unwrap())
            .await
            .unwrap()
    }

    /// Create a vendored package tracking `owner/repo` at `version`
    pub fn vendored_package(&self, dir: &str, owner: &str, repo: &str, version: &str) -> PathBuf {
        let package = self.temp.child(dir);
        package.create_dir_all().unwrap();
        package.child("old.c").write_str("int old;\n").unwrap();
        package
            .child("METADATA.yaml")
            .write_str(&format!(
                "name: {repo}\n\
                 third_party:\n  \
                   url:\n    \
                     - kind: HOMEPAGE\n      \
                       value: https://{repo}.example.org\n    \
                     - kind: ARCHIVE\n      \
                       value: https://github.com/{owner}/{repo}/releases/download/{version}/{repo}-{version}.tar.gz\n  \
                   version: \"{version}\"\n"
            ))
            .unwrap();
        package.path().to_path_buf()
    }

    /// Serve `tag` as the latest release of `owner/repo` with one tar.gz asset
    pub async fn mock_release(&self, owner: &str, repo: &str, tag: &str, files: &[(&str, &str)]) {
        let archive = tar_gz(&format!("{}-{}", repo, tag), files);
        let asset_path = format!("/downloads/{}-{}.tar.gz", repo, tag);

        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/releases/latest", owner, repo)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag_name": tag,
                "assets": [
                    {
                        "browser_download_url": format!("{}/downloads/{}-{}.exe", self.server.uri(), repo, tag),
                        "size": 1
                    },
                    {
                        "browser_download_url": format!("{}{}", self.server.uri(), asset_path),
                        "size": archive.len()
                    }
                ]
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path(asset_path))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
            .mount(&self.server)
            .await;
    }

    /// Entries left behind in the work directory
    pub fn work_dir_entries(&self) -> usize {
        std::fs::read_dir(self.temp.child("work").path())
            .unwrap()
            .count()
    }
}

/// Build a tar.gz with every file under a single top-level directory
pub fn tar_gz(top: &str, files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{}/{}", top, name), content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_help_lists_commands() {
    #[allow(deprecated)]
    let output = Command::cargo_bin("vendorup")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    output
        .assert()
        .success()
        .stdout(predicates::str::contains("check"))
        .stdout(predicates::str::contains("update"));
}
