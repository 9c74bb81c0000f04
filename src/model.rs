//! In-memory model built from the workbook.
//!
//! One [`DeviceConfig`] per RTU, each owning the ordered list of protection
//! relays ([`AttachmentConfig`]) wired to it. The [`DeviceRegistry`] is the
//! only place devices live between ingestion and materialization.

use indexmap::IndexMap;
use serde::Serialize;

/// Configuration of a single protection relay attached to an RTU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttachmentConfig {
    pub number: i64,
    pub name: String,
    pub ip: String,
    pub netmask: String,
    pub default_gateway: String,
    /// Free text label describing where the relay faces (line, busbar...).
    pub facing: String,
}

/// Configuration of a single RTU, serialized as the rendering context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceConfig {
    /// Unique key, also the name of the generated project directory.
    pub name: String,
    pub street_address: String,
    pub common_address: i64,
    pub ip: String,
    pub netmask: String,
    pub default_gateway: String,
    pub sntp_server: String,
    /// Relays in workbook row order.
    pub attachments: Vec<AttachmentConfig>,
}

impl DeviceConfig {
    /// Creates a device with the given name and every other field empty.
    ///
    /// # Arguments
    /// * `name` - Device name, also its output directory name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Devices keyed by name, iterated in the order they were first inserted.
#[derive(Debug, Default, Clone)]
pub struct DeviceRegistry {
    devices: IndexMap<String, DeviceConfig>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a device under its own name.
    ///
    /// Returns the record previously stored under that name, if any. A
    /// replaced device keeps the position of the original entry.
    pub fn insert(&mut self, device: DeviceConfig) -> Option<DeviceConfig> {
        self.devices.insert(device.name.clone(), device)
    }

    /// Looks up a device by name.
    ///
    /// # Returns
    /// * `Option<&DeviceConfig>` - The device, or `None` if no row named it
    pub fn get(&self, name: &str) -> Option<&DeviceConfig> {
        self.devices.get(name)
    }

    /// Looks up a device by name for appending attachments.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DeviceConfig> {
        self.devices.get_mut(name)
    }

    /// Returns true if a device with this name was ingested.
    pub fn contains(&self, name: &str) -> bool {
        self.devices.contains_key(name)
    }

    /// Number of distinct devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if the device sheet had no data rows.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Device names in sheet order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    /// Devices in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceConfig> {
        self.devices.values()
    }
}
