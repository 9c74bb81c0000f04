//! Run configuration for rtuforge.
//! Resolves the command line arguments into the values the pipeline needs.

use crate::cli::Args;
use crate::error::{Error, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// What to do when the device sheet names the same RTU twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicy {
    /// Keep the last row and warn
    #[default]
    LastWins,
    /// Abort the run
    Reject,
}

/// Resolved configuration of a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one CSV file per sheet
    pub workbook: PathBuf,
    /// Directory holding one subdirectory per template variant
    pub template_root: PathBuf,
    /// Directory where device projects are created
    pub output_root: PathBuf,
    /// CSV field delimiter
    pub delimiter: u8,
    /// Handling of repeated device names
    pub duplicates: DuplicatePolicy,
}

impl Config {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the delimiter is not a single ASCII character
    pub fn from_args(args: &Args) -> Result<Self> {
        if !args.delimiter.is_ascii() {
            return Err(Error::ConfigError(format!(
                "delimiter '{}' is not an ASCII character",
                args.delimiter
            )));
        }

        Ok(Self {
            workbook: args.conf.clone(),
            template_root: args.tmpl.clone(),
            output_root: args.output_dir.clone(),
            delimiter: args.delimiter as u8,
            duplicates: args.duplicates,
        })
    }
}
