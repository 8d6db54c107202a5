//! Bill-of-materials estimator.
//!
//! Every quantity is a closed-form product of the inputs:
//!
//! ```text
//! posts          = (sections + 1) * 2
//! beams          = sections * levels * 4
//! shelves        = sections * levels
//! fastener packs = shelves
//! mass  = (shelves * shelf volume * density + Σ count * component mass) * (1 + waste/100)
//! price = (Σ count * unit price) * (1 + waste/100)
//! ```

use serde::{Deserialize, Serialize};

/// Density of the shelf board, kg/m³.
pub const SHELF_DENSITY_KG_M3: f64 = 650.0;
/// Mass of one post, kg.
pub const POST_MASS_KG: f64 = 4.5;
/// Mass of one beam, kg.
pub const BEAM_MASS_KG: f64 = 2.0;
/// Mass of one fastener pack, kg.
pub const FASTENER_PACK_MASS_KG: f64 = 0.3;

/// Price of one unit of each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPrices {
    pub post: f64,
    pub beam: f64,
    pub shelf: f64,
    pub fastener_pack: f64,
}

impl Default for UnitPrices {
    fn default() -> Self {
        Self {
            post: 850.0,
            beam: 420.0,
            shelf: 600.0,
            fastener_pack: 150.0,
        }
    }
}

/// Inputs of one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BomInput {
    pub height_mm: u32,
    pub width_mm: u32,
    pub depth_mm: u32,
    /// Number of bays sharing posts.
    pub sections: u32,
    /// Shelves per bay.
    pub levels: u32,
    pub shelf_thickness_mm: u32,
    /// Extra material allowance, percent.
    pub waste_pct: f64,
    pub prices: UnitPrices,
}

/// Component counts with estimated mass and price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BillOfMaterials {
    pub posts: u64,
    pub beams: u64,
    pub shelves: u64,
    pub fastener_packs: u64,
    /// Tallest post in the bill.
    pub post_height_mm: u32,
    pub mass_kg: f64,
    pub price: f64,
}

impl BillOfMaterials {
    /// Adds another bill's counts, mass and price to this one.
    pub fn absorb(&mut self, other: &BillOfMaterials) {
        self.posts = self.posts.saturating_add(other.posts);
        self.beams = self.beams.saturating_add(other.beams);
        self.shelves = self.shelves.saturating_add(other.shelves);
        self.fastener_packs = self.fastener_packs.saturating_add(other.fastener_packs);
        self.post_height_mm = self.post_height_mm.max(other.post_height_mm);
        self.mass_kg += other.mass_kg;
        self.price += other.price;
    }
}

/// Runs the estimate for one input.
pub fn estimate_bom(input: &BomInput) -> BillOfMaterials {
    let sections = u64::from(input.sections);
    let levels = u64::from(input.levels);

    // Counts saturate; u32::MAX sections by u32::MAX levels does not fit in u64.
    let posts = (sections + 1) * 2;
    let shelves = sections.saturating_mul(levels);
    let beams = shelves.saturating_mul(4);
    let fastener_packs = shelves;

    let shelf_volume_m3 = (f64::from(input.width_mm) / 1000.0)
        * (f64::from(input.depth_mm) / 1000.0)
        * (f64::from(input.shelf_thickness_mm) / 1000.0);

    let raw_mass = shelves as f64 * shelf_volume_m3 * SHELF_DENSITY_KG_M3
        + posts as f64 * POST_MASS_KG
        + beams as f64 * BEAM_MASS_KG
        + fastener_packs as f64 * FASTENER_PACK_MASS_KG;

    let raw_price = posts as f64 * input.prices.post
        + beams as f64 * input.prices.beam
        + shelves as f64 * input.prices.shelf
        + fastener_packs as f64 * input.prices.fastener_pack;

    let waste_factor = 1.0 + input.waste_pct / 100.0;

    BillOfMaterials {
        posts,
        beams,
        shelves,
        fastener_packs,
        post_height_mm: input.height_mm,
        mass_kg: raw_mass * waste_factor,
        price: raw_price * waste_factor,
    }
}
