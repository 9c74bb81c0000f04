//! Template variant selection.
//! A device's template is chosen solely by how many protection relays it has.

use crate::error::{Error, Result};
use std::fmt;

/// Name of a template project directory inside the template library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantId(&'static str);

impl VariantId {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Supported variants, keyed by attachment count.
pub const VARIANTS: [(usize, VariantId); 3] = [
    (1, VariantId("Config_1_REF_V3_TEMPLATE")),
    (2, VariantId("Config_2_REF_V3_TEMPLATE")),
    (3, VariantId("Config_3_REF_V3_TEMPLATE")),
];

/// Returns the template variant for a device with `count` attachments.
///
/// # Errors
/// * `Error::UnsupportedVariant` if no template exists for `count`
pub fn variant(count: usize) -> Result<VariantId> {
    VARIANTS
        .iter()
        .find(|(attachments, _)| *attachments == count)
        .map(|(_, id)| *id)
        .ok_or(Error::UnsupportedVariant { count })
}
