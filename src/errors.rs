// src/errors.rs

//! Crate-wide error type.
//!
//! The conversion engine itself is total and never returns these; they only
//! come from the outer surfaces (config file, CLI argument parsing, output
//! serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathBenderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown shell: {0}")]
    UnknownShell(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PathBenderError>;
