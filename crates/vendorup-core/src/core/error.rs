use thiserror::Error;

pub type VendorResult<T> = Result<T, VendorError>;

#[derive(Error, Debug)]
pub enum VendorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WalkDir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// The anchor URL is not tagged as an archive URL.
    #[error("Invalid URL kind: {0}")]
    InvalidUrlKind(String),

    /// The anchor URL does not look like a GitHub release or archive download.
    #[error("Unsupported URL format: {0}")]
    UnsupportedUrlFormat(String),

    #[error("Release error: {0}")]
    Release(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Replace error: {0}")]
    Replace(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more packages could not be checked.
    /// Should exit with code 1.
    #[error("Check failed: {0}")]
    CheckFailed(String),
}
