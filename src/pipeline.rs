//! End-to-end generation: workbook in, one project directory per device out.

use crate::config::Config;
use crate::error::Result;
use crate::ingest::{load_registry, IngestWarning, Ingested};
use crate::materializer::ProjectMaterializer;
use crate::renderer::MiniJinjaRenderer;
use crate::source::CsvWorkbook;
use log::debug;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Generated project directories, in device sheet order
    pub generated: Vec<PathBuf>,
    /// Recoverable problems found in the workbook
    pub warnings: Vec<IngestWarning>,
}

/// Runs the whole pipeline for `config`.
///
/// # Flow
/// 1. Reads the device and attachment sheets into a registry
/// 2. Materializes every device from its template variant
///
/// # Errors
/// Returns the first fatal error; devices generated before it stay on disk.
pub fn generate(config: &Config) -> Result<Summary> {
    debug!("Running with {config:?}");
    let workbook = CsvWorkbook::new(&config.workbook).with_delimiter(config.delimiter);
    let Ingested { registry, warnings } = load_registry(&workbook, config.duplicates)?;

    let engine = MiniJinjaRenderer::new();
    let materializer =
        ProjectMaterializer::new(&engine, &config.template_root, &config.output_root)
            .protect(&config.workbook);
    let generated = materializer.materialize_all(&registry)?;

    Ok(Summary {
        generated,
        warnings,
    })
}
