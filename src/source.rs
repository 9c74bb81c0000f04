//! Access to the tabular input.
//! A workbook is a set of named sheets, each a list of rows of cell texts.

use crate::constants::SHEET_EXTENSION;
use crate::error::{Error, Result};
use csv::ReaderBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// One sheet row: cell texts in column order.
pub type Row = Vec<String>;

/// Trait for anything that can hand out the rows of a named sheet.
pub trait TabularSource {
    /// Returns every row of the sheet, header included.
    ///
    /// # Errors
    /// * `Error::MissingSheet` if the sheet does not exist
    fn sheet(&self, name: &str) -> Result<Vec<Row>>;
}

/// Workbook stored as a directory with one CSV file per sheet (`RTU.csv`, ...).
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    root: PathBuf,
    delimiter: u8,
}

impl CsvWorkbook {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Location of the file backing the given sheet.
    pub fn sheet_path(&self, name: &str) -> PathBuf {
        self.root.join(name).with_extension(SHEET_EXTENSION)
    }
}

impl TabularSource for CsvWorkbook {
    fn sheet(&self, name: &str) -> Result<Vec<Row>> {
        let path = self.sheet_path(name);
        if !path.is_file() {
            return Err(Error::MissingSheet {
                sheet: name.to_string(),
                workbook: self.root.display().to_string(),
            });
        }
        debug!("Reading sheet '{}' from {}", name, path.display());

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Row>());
        }

        if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
            if let Some(stripped) = first.strip_prefix('\u{feff}') {
                *first = stripped.to_string();
            }
        }

        debug!("Sheet '{}' has {} row(s)", name, rows.len());
        Ok(rows)
    }
}
