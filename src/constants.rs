//! Common constants used throughout the rtuforge application.

/// Sheet listing one RTU per row
pub const DEVICE_SHEET: &str = "RTU";

/// Sheet listing one protection relay per row, joined to `DEVICE_SHEET` by name
pub const ATTACHMENT_SHEET: &str = "PROTEZIONI";

/// Extension of the per-sheet files inside a workbook directory
pub const SHEET_EXTENSION: &str = "csv";

/// Default workbook directory
pub const DEFAULT_WORKBOOK: &str = "conf";

/// Suffix of the companion directory next to a project file
pub const FILES_SUFFIX: &str = " Files";

/// Documents rendered in every generated project, relative to its companion directory
pub const TARGET_FILES: [&str; 4] = [
    // main profile
    "Profile.xml",
    // IEC 61850 station description
    "IEC61850/Station.icd",
    // network interfaces
    "Interfaces.xml",
    // thermal monitoring
    "Thermal.xml",
];
