//! Section record.

use serde::{Deserialize, Serialize};

use super::field::{FieldDomain, FieldKey};
use super::value::{FieldValue, ValidationError};

/// One shelving unit's attributes.
///
/// A freshly added section has every attribute at zero / `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub height_mm: u32,
    #[serde(default)]
    pub width_mm: u32,
    #[serde(default)]
    pub depth_mm: u32,
    #[serde(default)]
    pub load_per_shelf_kg: u32,
    #[serde(default)]
    pub max_total_load_kg: u32,
    #[serde(default)]
    pub levels_count: u32,
    #[serde(default)]
    pub extra_section: bool,
}

impl Section {
    /// Creates an all-zero section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` into the attribute named by `key`.
    ///
    /// A value from the wrong domain is rejected and nothing is written.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<(), ValidationError> {
        match (key, value) {
            (FieldKey::HeightMm, FieldValue::Integer(v)) => self.height_mm = v,
            (FieldKey::WidthMm, FieldValue::Integer(v)) => self.width_mm = v,
            (FieldKey::DepthMm, FieldValue::Integer(v)) => self.depth_mm = v,
            (FieldKey::LoadPerShelfKg, FieldValue::Integer(v)) => self.load_per_shelf_kg = v,
            (FieldKey::MaxTotalLoadKg, FieldValue::Integer(v)) => self.max_total_load_kg = v,
            (FieldKey::LevelsCount, FieldValue::Integer(v)) => self.levels_count = v,
            (FieldKey::ExtraSection, FieldValue::Boolean(v)) => self.extra_section = v,
            (FieldKey::ExtraSection, FieldValue::Integer(_)) => {
                return Err(ValidationError::WrongDomain {
                    expected: FieldDomain::Boolean,
                });
            }
            (_, FieldValue::Boolean(_)) => {
                return Err(ValidationError::WrongDomain {
                    expected: FieldDomain::Integer,
                });
            }
        }
        Ok(())
    }
}
