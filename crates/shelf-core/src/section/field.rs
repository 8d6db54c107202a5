//! The fixed questionnaire: which fields a section has, in which order,
//! and what each one accepts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Key of a single section attribute.
///
/// The string form (`height_mm`, `extra_section`, ...) is used both on disk
/// and inside button tokens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKey {
    HeightMm,
    WidthMm,
    DepthMm,
    LoadPerShelfKg,
    MaxTotalLoadKg,
    LevelsCount,
    ExtraSection,
}

impl FieldKey {
    /// Position of this key in [`FIELDS`].
    pub fn position(self) -> usize {
        FIELDS
            .iter()
            .position(|d| d.key == self)
            .unwrap_or(FIELDS.len())
    }

    /// Descriptor of this key.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self.position()]
    }
}

/// Value domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDomain {
    /// Base-10 integer, zero or greater.
    Integer,
    /// Yes/no answer.
    Boolean,
}

/// One row of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    /// Human label shown in prompts.
    pub label: &'static str,
    pub domain: FieldDomain,
    /// Values offered as buttons. Each entry is valid raw input for `domain`.
    pub presets: &'static [&'static str],
}

/// The questionnaire, in the order fields are asked.
pub const FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor {
        key: FieldKey::HeightMm,
        label: "Высота, мм",
        domain: FieldDomain::Integer,
        presets: &["1500", "1800", "2000", "2200", "2500"],
    },
    FieldDescriptor {
        key: FieldKey::WidthMm,
        label: "Ширина, мм",
        domain: FieldDomain::Integer,
        presets: &["700", "1000", "1200", "1500"],
    },
    FieldDescriptor {
        key: FieldKey::DepthMm,
        label: "Глубина, мм",
        domain: FieldDomain::Integer,
        presets: &["300", "400", "500", "600"],
    },
    FieldDescriptor {
        key: FieldKey::LoadPerShelfKg,
        label: "Нагрузка на полку, кг",
        domain: FieldDomain::Integer,
        presets: &["50", "100", "150", "200", "300"],
    },
    FieldDescriptor {
        key: FieldKey::MaxTotalLoadKg,
        label: "Макс. общая нагрузка, кг",
        domain: FieldDomain::Integer,
        presets: &["300", "500", "1000", "1500"],
    },
    FieldDescriptor {
        key: FieldKey::LevelsCount,
        label: "Кол-во уровней",
        domain: FieldDomain::Integer,
        presets: &["3", "4", "5", "6"],
    },
    FieldDescriptor {
        key: FieldKey::ExtraSection,
        label: "Доп секция (да/нет)",
        domain: FieldDomain::Boolean,
        presets: &["да", "нет"],
    },
];

/// Number of fields in one section.
pub const FIELD_COUNT: usize = FIELDS.len();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::value::parse_value;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_order_matches_enum_order() {
        let keys: Vec<FieldKey> = FIELDS.iter().map(|d| d.key).collect();
        let enum_keys: Vec<FieldKey> = FieldKey::iter().collect();
        assert_eq!(keys, enum_keys);
    }

    #[test]
    fn test_key_string_form() {
        assert_eq!(FieldKey::LoadPerShelfKg.as_ref(), "load_per_shelf_kg");
        assert_eq!(
            FieldKey::from_str("max_total_load_kg").unwrap(),
            FieldKey::MaxTotalLoadKg
        );
        assert!(FieldKey::from_str("color").is_err());
    }

    #[test]
    fn test_position_and_descriptor() {
        assert_eq!(FieldKey::HeightMm.position(), 0);
        assert_eq!(FieldKey::ExtraSection.position(), FIELD_COUNT - 1);
        assert_eq!(FieldKey::DepthMm.descriptor().label, "Глубина, мм");
    }

    #[test]
    fn test_every_preset_is_valid_input() {
        for descriptor in FIELDS.iter() {
            assert!(!descriptor.presets.is_empty());
            for preset in descriptor.presets {
                assert!(
                    parse_value(descriptor.domain, preset).is_ok(),
                    "preset {preset} of {} does not parse",
                    descriptor.key
                );
            }
        }
    }
}
