//! Error handling module for the asset helpers and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for toyunda tool operations outside the sidecar editor
#[derive(Error, Debug)]
pub enum ToolsError {
    /// Configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Required environment variable is not set
    #[error("Environment variable {name} is not set")]
    MissingEnv { name: String },

    /// Download of a single asset failed
    #[error("Failed to download '{url}': {message}")]
    Download { url: String, message: String },

    /// HTTP client could not be set up
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Copy of the web tree or an auxiliary file failed
    #[error("Failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the source tree failed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Interrupt handler could not be installed
    #[error("Failed to install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for toyunda tool operations
pub type ToolsResult<T> = std::result::Result<T, ToolsError>;
