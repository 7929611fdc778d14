use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataPrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration validation failed: {details}")]
    ConfigValidation { details: String },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("CLI argument validation failed: {details}")]
    CliArgumentValidation { details: String },

    #[error("Data directory creation failed at {path}: {reason}")]
    DataDirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to download {file} from {url}: {reason}")]
    FileDownload {
        file: String,
        url: String,
        reason: String,
    },

    #[error("Failed to extract {source_path} into {destination}: {reason}")]
    Extraction {
        source_path: PathBuf,
        destination: PathBuf,
        reason: String,
    },

    #[error("Failed to remove {path}: {reason}")]
    Removal { path: PathBuf, reason: String },

    #[error("Failed to compute digest of {path}: {reason}")]
    Digest { path: PathBuf, reason: String },

    #[error("Failed to load manifest from {path}: {reason}")]
    ManifestLoad { path: PathBuf, reason: String },

    #[error("Failed to save manifest to {path}: {reason}")]
    ManifestSave { path: PathBuf, reason: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
