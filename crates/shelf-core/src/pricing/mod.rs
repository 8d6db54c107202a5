//! Price estimation for a list of sections.
//!
//! Two independent closed-form estimators are provided:
//!
//! - `footprint`: total shelf area (width × depth × levels) times a price per m²
//! - `bom`: discrete component counts, mass and price for posts, beams,
//!   shelves and fastener packs
//!
//! Both are pure. [`Pricer`] wraps them for callers that must reject an empty
//! section list instead of quoting zero.

mod bom;
mod config;
mod footprint;
mod pricer;

pub use bom::{
    BEAM_MASS_KG, BillOfMaterials, BomInput, FASTENER_PACK_MASS_KG, POST_MASS_KG,
    SHELF_DENSITY_KG_M3, UnitPrices, estimate_bom,
};
pub use config::{BomConfig, PricingConfig, PricingStrategy};
pub use footprint::{DEFAULT_PRICE_PER_M2, FootprintQuote, footprint_quote, section_area_m2};
pub use pricer::{BomPricer, FootprintPricer, Pricer, PricingError, QuantityUnit, Quote};
