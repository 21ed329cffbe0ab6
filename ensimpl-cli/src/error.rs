//! Error handling for the Ensimpl CLI

use ensimpl_core::registry::ENSIMPL_DIR_ENV;
use ensimpl_core::EnsimplError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Ensimpl CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unable to find database: {key} (directory: {directory})")]
    DatabaseNotFound { key: String, directory: String },

    #[error("Invalid source db '{source_db}'")]
    InvalidSourceDb { source_db: String, valid: Vec<String> },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database { message: message.into() }
    }
}

impl From<&EnsimplError> for CliError {
    fn from(err: &EnsimplError) -> Self {
        match err {
            EnsimplError::Configuration { message } => Self::config(message.clone()),
            EnsimplError::DatabaseNotFound { key, directory } => Self::DatabaseNotFound {
                key: key.clone(),
                directory: directory.clone(),
            },
            EnsimplError::InvalidSourceDb { source_db, valid } => Self::InvalidSourceDb {
                source_db: source_db.clone(),
                valid: valid.clone(),
            },
            EnsimplError::InvalidRegion { .. } | EnsimplError::InvalidTerm { .. } => {
                Self::validation(err.to_string())
            }
            EnsimplError::Io(io) => Self::io(io.to_string()),
            other => Self::database(other.to_string()),
        }
    }
}

impl From<EnsimplError> for CliError {
    fn from(err: EnsimplError) -> Self {
        Self::from(&err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Config { .. } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Pass the database directory with --directory\n\
                 • Set {} or [database] directory in ensimpl.toml\n\
                 • Use 'ensimpl config --example' to generate a sample configuration",
                ENSIMPL_DIR_ENV
            ));
        }

        CliError::DatabaseNotFound { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Use 'ensimpl releases' to list the available release/species pairs\n\
                 • Try --greedy to follow the latest release of the same assembly",
            );
        }

        CliError::InvalidSourceDb { valid, .. } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Valid source dbs for this database: {}",
                valid.join(", ")
            ));
        }

        CliError::Database { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check that the .db3 file is not corrupted or truncated\n\
                 • Ensure the file was built for this version of ensimpl",
            );
        }

        _ => {}
    }

    message
}

/// Render any command error, recovering core and CLI errors for suggestions
pub fn describe(error: &anyhow::Error) -> String {
    if let Some(cli_error) = error.downcast_ref::<CliError>() {
        return format_error_with_suggestions(cli_error);
    }
    match error.downcast_ref::<EnsimplError>() {
        Some(core_error) => {
            let rendered = format_error_with_suggestions(&CliError::from(core_error));
            if error.chain().count() > 1 {
                format!("{}: {}", error, rendered)
            } else {
                rendered
            }
        }
        None => format!("{:#}", error),
    }
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &anyhow::Error) -> ! {
    eprintln!("Error: {}", describe(error));
    std::process::exit(1);
}
