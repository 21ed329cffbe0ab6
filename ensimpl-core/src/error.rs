//! Error taxonomy for the Ensimpl core library

use std::path::Path;
use thiserror::Error;

/// Errors raised by registry, metadata, search and gene operations
#[derive(Debug, Error)]
pub enum EnsimplError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unable to find database: {key} (directory: {directory})")]
    DatabaseNotFound { key: String, directory: String },

    #[error("Invalid region: {message}")]
    InvalidRegion { message: String },

    #[error("Invalid term: {message}")]
    InvalidTerm { message: String },

    #[error("Invalid source db '{source_db}', valid source dbs are: {}", valid.join(","))]
    InvalidSourceDb { source_db: String, valid: Vec<String> },

    #[error("Search failed: {message}")]
    SearchFailure { message: String },

    #[error("Gene assembly failed: {message}")]
    AssemblyFailure { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnsimplError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn database_not_found<S: Into<String>>(key: S, directory: S) -> Self {
        Self::DatabaseNotFound {
            key: key.into(),
            directory: directory.into(),
        }
    }

    /// A missing database file, reported by path
    pub fn missing_file(path: &Path) -> Self {
        let directory = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self::DatabaseNotFound {
            key: path.display().to_string(),
            directory,
        }
    }

    pub fn invalid_region<S: Into<String>>(message: S) -> Self {
        Self::InvalidRegion { message: message.into() }
    }

    pub fn invalid_term<S: Into<String>>(message: S) -> Self {
        Self::InvalidTerm { message: message.into() }
    }

    pub fn invalid_source_db<S: Into<String>>(source_db: S, valid: Vec<String>) -> Self {
        Self::InvalidSourceDb {
            source_db: source_db.into(),
            valid,
        }
    }

    pub fn search_failure<S: Into<String>>(message: S) -> Self {
        Self::SearchFailure { message: message.into() }
    }

    pub fn assembly_failure<S: Into<String>>(message: S) -> Self {
        Self::AssemblyFailure { message: message.into() }
    }

    /// True for errors caused by caller input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRegion { .. } | Self::InvalidTerm { .. } | Self::InvalidSourceDb { .. }
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, EnsimplError>;
