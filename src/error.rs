//! Error types for each stage of a classification run

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unprocessed folder does not exist: {0}")]
    MissingUnprocessed(PathBuf),

    #[error("destination folder for '{keyword}' does not exist: {path}")]
    MissingDestination { keyword: String, path: PathBuf },

    #[error("rule #{index} has an empty short_word")]
    EmptyKeyword { index: usize },
}

/// Errors raised while locating a keyword inside a PDF
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read PDF {path}: {reason}")]
    PdfOpen { path: PathBuf, reason: String },

    #[error("page {page} not found in {path}")]
    PageFetch { path: PathBuf, page: u32 },

    #[error("failed to read content streams of page {page} in {path}: {reason}")]
    ContentStream {
        path: PathBuf,
        page: u32,
        reason: String,
    },

    #[error("failed to extract text from {path}: {reason}")]
    TextExtraction { path: PathBuf, reason: String },
}

/// Fatal errors that stop a whole run
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
