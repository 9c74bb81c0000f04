//! Ingestion of the device and attachment sheets into a [`DeviceRegistry`].
//!
//! Both sheets share the same layout rules: the first row is a header, and
//! the first row whose leading cell is empty ends the data region. Columns
//! are mapped to fields by position through the declarative tables
//! [`DEVICE_COLUMNS`] and [`ATTACHMENT_COLUMNS`].
//!
//! Problems local to a cell or a row are collected as [`IngestWarning`]s and
//! logged; ingestion carries on. Only a missing sheet or a rejected duplicate
//! is fatal.

use crate::config::DuplicatePolicy;
use crate::constants::{ATTACHMENT_SHEET, DEVICE_SHEET};
use crate::error::{Error, Result};
use crate::model::{AttachmentConfig, DeviceConfig, DeviceRegistry};
use crate::source::{Row, TabularSource};
use log::{debug, warn};
use thiserror::Error;

/// How a column's text is stored into a record.
pub enum Field<T> {
    Text(fn(&mut T, String)),
    Integer(fn(&mut T, i64)),
}

/// One entry of a column-to-field table.
pub struct Column<T> {
    pub name: &'static str,
    pub field: Field<T>,
}

/// Device sheet layout, in column order.
pub const DEVICE_COLUMNS: [Column<DeviceConfig>; 7] = [
    Column { name: "name", field: Field::Text(|d, v| d.name = v) },
    Column { name: "street address", field: Field::Text(|d, v| d.street_address = v) },
    Column { name: "common address", field: Field::Integer(|d, v| d.common_address = v) },
    Column { name: "ip", field: Field::Text(|d, v| d.ip = v) },
    Column { name: "netmask", field: Field::Text(|d, v| d.netmask = v) },
    Column { name: "default gateway", field: Field::Text(|d, v| d.default_gateway = v) },
    Column { name: "sntp server", field: Field::Text(|d, v| d.sntp_server = v) },
];

/// An attachment row before it is joined to its device.
#[derive(Debug, Default)]
pub struct AttachmentRow {
    pub device: String,
    pub attachment: AttachmentConfig,
}

/// Attachment sheet layout, in column order.
pub const ATTACHMENT_COLUMNS: [Column<AttachmentRow>; 7] = [
    Column { name: "device", field: Field::Text(|r, v| r.device = v) },
    Column { name: "number", field: Field::Integer(|r, v| r.attachment.number = v) },
    Column { name: "name", field: Field::Text(|r, v| r.attachment.name = v) },
    Column { name: "ip", field: Field::Text(|r, v| r.attachment.ip = v) },
    Column { name: "netmask", field: Field::Text(|r, v| r.attachment.netmask = v) },
    Column {
        name: "default gateway",
        field: Field::Text(|r, v| r.attachment.default_gateway = v),
    },
    Column { name: "facing", field: Field::Text(|r, v| r.attachment.facing = v) },
];

/// Recoverable problem found while reading a sheet. Rows are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestWarning {
    #[error("{sheet} row {row}: invalid number '{value}' in column '{column}', using 0")]
    InvalidNumber {
        sheet: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{} row {row}: unknown device '{device}', row discarded", ATTACHMENT_SHEET)]
    UnknownDevice { row: usize, device: String },

    #[error("{} row {row}: duplicate device '{name}' replaces the earlier row", DEVICE_SHEET)]
    DuplicateDevice { row: usize, name: String },
}

/// Result of reading both sheets.
#[derive(Debug, Default)]
pub struct Ingested {
    pub registry: DeviceRegistry,
    pub warnings: Vec<IngestWarning>,
}

/// Yields `(row number, cells)` for the data region of a sheet.
fn data_rows(rows: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
    rows.iter()
        .enumerate()
        .skip(1)
        .take_while(|(_, row)| row.first().is_some_and(|cell| !cell.trim().is_empty()))
        .map(|(index, row)| (index + 1, row))
}

/// Decodes one row through a column table.
///
/// Extra cells are ignored and missing cells leave the default value.
fn decode_row<T: Default>(
    sheet: &'static str,
    row: usize,
    columns: &[Column<T>],
    cells: &[String],
    warnings: &mut Vec<IngestWarning>,
) -> T {
    let mut record = T::default();
    for (column, cell) in columns.iter().zip(cells) {
        let text = cell.trim();
        match column.field {
            Field::Text(set) => set(&mut record, text.to_string()),
            Field::Integer(set) => {
                if text.is_empty() {
                    continue;
                }
                match text.parse::<i64>() {
                    Ok(value) => set(&mut record, value),
                    Err(_) => {
                        let warning = IngestWarning::InvalidNumber {
                            sheet,
                            row,
                            column: column.name,
                            value: text.to_string(),
                        };
                        warn!("{warning}");
                        warnings.push(warning);
                    }
                }
            }
        }
    }
    record
}

/// Parses the device sheet into a fresh registry.
///
/// # Arguments
/// * `rows` - Device sheet rows, header included
/// * `policy` - What to do with a repeated device name
///
/// # Errors
/// * `Error::DuplicateDevice` if a name repeats and `policy` is `Reject`
pub fn ingest_devices(rows: &[Row], policy: DuplicatePolicy) -> Result<Ingested> {
    let mut ingested = Ingested::default();

    for (row, cells) in data_rows(rows) {
        let device: DeviceConfig =
            decode_row(DEVICE_SHEET, row, &DEVICE_COLUMNS, cells, &mut ingested.warnings);

        if ingested.registry.contains(&device.name) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateDevice {
                        name: device.name,
                        row,
                    });
                }
                DuplicatePolicy::LastWins => {
                    let warning = IngestWarning::DuplicateDevice {
                        row,
                        name: device.name.clone(),
                    };
                    warn!("{warning}");
                    ingested.warnings.push(warning);
                }
            }
        }

        debug!("Accepted device '{}' (row {})", device.name, row);
        ingested.registry.insert(device);
    }

    Ok(ingested)
}

/// Appends every attachment row to its owning device.
///
/// Rows naming an unknown device are discarded with a warning; the set of
/// devices never changes.
///
/// # Returns
/// * `Vec<IngestWarning>` - Problems found, in row order
pub fn ingest_attachments(rows: &[Row], registry: &mut DeviceRegistry) -> Vec<IngestWarning> {
    let mut warnings = Vec::new();

    for (row, cells) in data_rows(rows) {
        let AttachmentRow { device, attachment } =
            decode_row(ATTACHMENT_SHEET, row, &ATTACHMENT_COLUMNS, cells, &mut warnings);

        match registry.get_mut(&device) {
            Some(owner) => {
                debug!(
                    "Attached '{}' #{} to device '{}' (row {})",
                    attachment.name, attachment.number, device, row
                );
                owner.attachments.push(attachment);
            }
            None => {
                let warning = IngestWarning::UnknownDevice { row, device };
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    warnings
}

/// Reads both sheets from `source` and returns the joined model.
///
/// # Errors
/// * `Error::MissingSheet` if either sheet is absent
/// * `Error::DuplicateDevice` under `DuplicatePolicy::Reject`
pub fn load_registry(source: &dyn TabularSource, policy: DuplicatePolicy) -> Result<Ingested> {
    let device_rows = source.sheet(DEVICE_SHEET)?;
    let attachment_rows = source.sheet(ATTACHMENT_SHEET)?;

    let mut ingested = ingest_devices(&device_rows, policy)?;
    let warnings = ingest_attachments(&attachment_rows, &mut ingested.registry);
    ingested.warnings.extend(warnings);

    debug!(
        "Loaded {} device(s) with {} warning(s)",
        ingested.registry.len(),
        ingested.warnings.len()
    );
    Ok(ingested)
}
