//! Pricer trait and its two implementations.

use serde::Serialize;
use thiserror::Error;

use super::bom::{BillOfMaterials, BomInput, estimate_bom};
use super::config::BomConfig;
use super::footprint::footprint_quote;
use crate::section::Section;

/// Unit of [`Quote::quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    SquareMetres,
    Kilograms,
}

/// A priced list of sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// The estimator's base quantity: shelf area or total mass.
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub total: f64,
    /// Component breakdown, when the estimator produces one.
    pub bill: Option<BillOfMaterials>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// No sections were given; a zero total would be misleading.
    #[error("nothing to price: add at least one section")]
    NothingToPrice,
}

/// Turns sections into a quote. Implementations are pure.
pub trait Pricer: Send + Sync {
    fn quote(&self, sections: &[Section]) -> Result<Quote, PricingError>;
}

/// Shelf area times a price per m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintPricer {
    price_per_m2: f64,
}

impl FootprintPricer {
    pub fn new(price_per_m2: f64) -> Self {
        Self { price_per_m2 }
    }
}

impl Pricer for FootprintPricer {
    fn quote(&self, sections: &[Section]) -> Result<Quote, PricingError> {
        if sections.is_empty() {
            return Err(PricingError::NothingToPrice);
        }
        let q = footprint_quote(sections, self.price_per_m2);
        Ok(Quote {
            quantity: q.area_m2,
            unit: QuantityUnit::SquareMetres,
            total: q.total,
            bill: None,
        })
    }
}

/// Sums a bill of materials over all sections.
///
/// A section with the extra-section flag set is estimated as two bays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BomPricer {
    config: BomConfig,
}

impl BomPricer {
    pub fn new(config: BomConfig) -> Self {
        Self { config }
    }

    /// Estimator input for one section.
    pub fn input_for(&self, section: &Section) -> BomInput {
        BomInput {
            height_mm: section.height_mm,
            width_mm: section.width_mm,
            depth_mm: section.depth_mm,
            sections: 1 + u32::from(section.extra_section),
            levels: section.levels_count,
            shelf_thickness_mm: self.config.shelf_thickness_mm,
            waste_pct: self.config.waste_pct,
            prices: self.config.prices,
        }
    }
}

impl Pricer for BomPricer {
    fn quote(&self, sections: &[Section]) -> Result<Quote, PricingError> {
        if sections.is_empty() {
            return Err(PricingError::NothingToPrice);
        }
        let mut bill = BillOfMaterials::default();
        for section in sections {
            bill.absorb(&estimate_bom(&self.input_for(section)));
        }
        Ok(Quote {
            quantity: bill.mass_kg,
            unit: QuantityUnit::Kilograms,
            total: bill.price,
            bill: Some(bill),
        })
    }
}
