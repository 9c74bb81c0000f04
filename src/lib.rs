//! rtuforge generates engineering projects for remote terminal units (RTUs).
//! It reads a workbook describing the RTUs and their protection relays,
//! picks a template project per RTU and renders the device values into it.

/// Command-line interface module for the rtuforge application
pub mod cli;

/// Run configuration resolved from the command line
pub mod config;

/// Sheet names, file names and other fixed values
pub mod constants;

/// Error types and handling for the rtuforge application
pub mod error;

/// Directory copy, removal and rename helpers
pub mod files;

/// Sheet rows to device registry
/// Joins the attachment sheet to the device sheet by device name
pub mod ingest;

/// Logger initialization
pub mod logger;

/// Project directory generation
/// Copies, renames and renders one template variant per device
pub mod materializer;

/// Device and attachment records
pub mod model;

/// Whole run orchestration
pub mod pipeline;

/// MiniJinja rendering of project documents
pub mod renderer;

/// Workbook access
pub mod source;

/// Attachment count to template variant
pub mod variant;
