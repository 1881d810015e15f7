//! Error types for casegraph operations.
//!
//! This module provides the main error type [`CasegraphError`] which wraps
//! the error conditions that can occur while reading, laying out, and
//! exporting a graph.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for casegraph operations.
#[derive(Debug, Error)]
pub enum CasegraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CasegraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

/// Errors raised while loading the TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
