use crate::core::path::{config_file, ensure_dir};
use crate::core::{VendorError, VendorResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Parent directory for per-update download caches
    ///
    /// Default locations:
    /// - Windows: %LOCALAPPDATA%\vendorup
    /// - Linux: ~/.cache/vendorup
    /// - macOS: ~/Library/Caches/vendorup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<String>,

    /// Files carried over from the old vendored tree when the new
    /// release does not ship them (e.g. "OWNERS", "patches")
    #[serde(default)]
    pub preserve_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Personal access token (GITHUB_TOKEN takes precedence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// HTTP timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_github_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            work_dir: None,
            preserve_files: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\vendorup\config.yaml
    /// - Linux: ~/.config/vendorup/config.yaml
    /// - macOS: ~/Library/Application Support/vendorup/config.yaml
    pub fn load() -> VendorResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path, creating default if it doesn't exist
    pub fn load_from(config_path: &Path) -> VendorResult<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| VendorError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to platform-specific config directory
    pub fn save(&self) -> VendorResult<()> {
        self.save_to(&config_file()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> VendorResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| VendorError::Path("Invalid config path".to_string()))?;

        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| VendorError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the work directory path
    pub fn get_work_dir(&self) -> VendorResult<PathBuf> {
        if let Some(ref dir) = self.work_dir {
            Ok(PathBuf::from(dir))
        } else {
            crate::core::path::cache_dir()
        }
    }
}

impl ConfigProvider for Config {
    fn github_api_url(&self) -> &str {
        &self.github.api_url
    }

    fn github_token(&self) -> Option<String> {
        std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.github.token.clone())
    }

    fn http_timeout(&self) -> Option<Duration> {
        match self.github.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    fn work_dir(&self) -> VendorResult<PathBuf> {
        self.get_work_dir()
    }

    fn preserve_files(&self) -> &[String] {
        &self.preserve_files
    }
}
