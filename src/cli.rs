//! Command-line interface implementation for rtuforge.
//! Provides argument parsing and help text formatting using clap.

use crate::config::DuplicatePolicy;
use crate::constants::DEFAULT_WORKBOOK;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for rtuforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "rtuforge: generate RTU projects from a device workbook", long_about = None)]
pub struct Args {
    /// Workbook directory containing RTU.csv and PROTEZIONI.csv
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_WORKBOOK)]
    pub conf: PathBuf,

    /// Path to the template projects
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub tmpl: PathBuf,

    /// Directory where the device projects will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Field delimiter of the CSV sheets
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// How to handle a device name that appears more than once
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::LastWins)]
    pub duplicates: DuplicatePolicy,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
