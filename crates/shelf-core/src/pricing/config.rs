//! Pricing configuration.

use serde::{Deserialize, Serialize};

use super::bom::UnitPrices;
use super::footprint::DEFAULT_PRICE_PER_M2;
use super::pricer::{BomPricer, FootprintPricer, Pricer};

/// Which estimator quotes the sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    /// Shelf area times a price per m².
    #[default]
    Footprint,
    /// Component counts times unit prices.
    BillOfMaterials,
}

/// Parameters of the bill-of-materials estimator not taken from a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BomConfig {
    pub shelf_thickness_mm: u32,
    pub waste_pct: f64,
    pub prices: UnitPrices,
}

impl Default for BomConfig {
    fn default() -> Self {
        Self {
            shelf_thickness_mm: 16,
            waste_pct: 10.0,
            prices: UnitPrices::default(),
        }
    }
}

/// `[pricing]` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub strategy: PricingStrategy,
    pub price_per_m2: f64,
    pub bom: BomConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            strategy: PricingStrategy::default(),
            price_per_m2: DEFAULT_PRICE_PER_M2,
            bom: BomConfig::default(),
        }
    }
}

impl PricingConfig {
    /// Builds the pricer selected by `strategy`.
    pub fn build_pricer(&self) -> Box<dyn Pricer> {
        match self.strategy {
            PricingStrategy::Footprint => Box::new(FootprintPricer::new(self.price_per_m2)),
            PricingStrategy::BillOfMaterials => Box::new(BomPricer::new(self.bom)),
        }
    }
}
