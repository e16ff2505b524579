//! CLI-specific error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::extractor::ExtractError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    ExtractError(#[from] ExtractError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(String),
}
