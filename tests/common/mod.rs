//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use rtuforge::constants::{ATTACHMENT_SHEET, DEVICE_SHEET, TARGET_FILES};
use rtuforge::source::{Row, TabularSource};
use rtuforge::variant::VARIANTS;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const PROFILE_TEMPLATE: &str = r#"<Profile name="{{ name }}" address="{{ street_address }}">
  <CommonAddress>{{ common_address }}</CommonAddress>
  <Ip>{{ ip }}</Ip>
{% for attachment in attachments %}  <Relay index="{{ loop.index }}" number="{{ attachment.number }}">{{ attachment.name }}</Relay>
{% endfor %}</Profile>
"#;

pub const GENERIC_TEMPLATE: &str = "<Doc device=\"{{ name }}\" gateway=\"{{ default_gateway }}\"/>\n";

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Sheets held in memory.
#[derive(Default)]
pub struct MemorySource {
    pub sheets: HashMap<String, Vec<Row>>,
}

impl MemorySource {
    pub fn new(devices: Vec<Row>, attachments: Vec<Row>) -> Self {
        let mut sheets = HashMap::new();
        sheets.insert(DEVICE_SHEET.to_string(), devices);
        sheets.insert(ATTACHMENT_SHEET.to_string(), attachments);
        Self { sheets }
    }
}

impl TabularSource for MemorySource {
    fn sheet(&self, name: &str) -> rtuforge::error::Result<Vec<Row>> {
        self.sheets
            .get(name)
            .cloned()
            .ok_or_else(|| rtuforge::error::Error::MissingSheet {
                sheet: name.to_string(),
                workbook: "memory".to_string(),
            })
    }
}

/// Creates one template project per variant under `root`.
pub fn build_template_library(root: &Path) {
    for (_, id) in VARIANTS {
        let variant = id.as_str();
        let project = root.join(variant);
        let files = project.join(format!("{variant} Files"));
        fs::create_dir_all(files.join("IEC61850")).unwrap();
        fs::write(project.join(format!("{variant}.t300")), "T300 project\n").unwrap();
        for target in TARGET_FILES {
            let content = if target == "Profile.xml" {
                PROFILE_TEMPLATE
            } else {
                GENERIC_TEMPLATE
            };
            fs::write(files.join(target), content).unwrap();
        }
        fs::write(files.join("Firmware.bin"), [0u8, 159, 146, 150]).unwrap();
    }
}

/// Writes a workbook directory with the given sheet contents.
pub fn write_workbook(dir: &Path, devices: &str, attachments: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(format!("{DEVICE_SHEET}.csv")), devices).unwrap();
    fs::write(dir.join(format!("{ATTACHMENT_SHEET}.csv")), attachments).unwrap();
}
