//! Error handling for the rtuforge application.
//! Defines the error type and result alias used throughout the crate.
//!
//! Recoverable problems found while reading the workbook (bad numbers,
//! unknown join keys) are not errors: they are reported as
//! [`crate::ingest::IngestWarning`]. Everything here aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error types for rtuforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while reading a CSV sheet
    #[error("CSV error: {0}.")]
    CsvError(#[from] csv::Error),

    /// Represents errors raised while walking a template tree
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// Represents errors that occur during template parsing or rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while building the rendering context
    #[error("Serialization error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents invalid command line or configuration values
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A required sheet is not present in the workbook
    #[error("Sheet '{sheet}' not found in workbook '{workbook}'.")]
    MissingSheet { sheet: String, workbook: String },

    /// A device name appears twice and the duplicate policy rejects it
    #[error("Duplicate device '{name}' at row {row}.")]
    DuplicateDevice { name: String, row: usize },

    /// No template variant exists for the number of attachments
    #[error("Unsupported variant: no template for {count} attachment(s).")]
    UnsupportedVariant { count: usize },

    /// A device name cannot be used as an output directory name
    #[error("Invalid device name '{0}': it must be a single path component.")]
    InvalidDeviceName(String),

    /// A device's output directory would overwrite template or workbook input
    #[error("Refusing to replace '{}': it holds template or workbook input.", .0.display())]
    ProtectedPath(PathBuf),

    /// The copied template tree lacks its project file or companion directory
    #[error("Missing project artifact '{artifact}' in '{}'.", dir.display())]
    MissingProjectArtifact { artifact: String, dir: PathBuf },

    /// Wraps any failure that happened while materializing one device
    #[error("Failed to generate project for device '{device}': {source}")]
    Materialize {
        device: String,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
