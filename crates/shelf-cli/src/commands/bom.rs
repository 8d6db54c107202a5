use colored::Colorize;
use shelf_application::render::format_money;
use shelf_core::pricing::{BomConfig, BomInput, UnitPrices, estimate_bom};

use crate::BomArgs;

pub fn run(args: &BomArgs, defaults: &BomConfig) {
    let input = input_from(args, defaults);
    let bill = estimate_bom(&input);

    println!("{}", "Bill of materials".bright_magenta().bold());
    println!("  posts:          {} x {} mm", bill.posts, bill.post_height_mm);
    println!("  beams:          {}", bill.beams);
    println!("  shelves:        {}", bill.shelves);
    println!("  fastener packs: {}", bill.fastener_packs);
    println!("  mass:           {:.2} kg", bill.mass_kg);
    println!("{}", format!("  price:          {}", format_money(bill.price)).green());
}

fn input_from(args: &BomArgs, defaults: &BomConfig) -> BomInput {
    let base = defaults.prices;
    BomInput {
        height_mm: args.height,
        width_mm: args.width,
        depth_mm: args.depth,
        sections: args.sections,
        levels: args.levels,
        shelf_thickness_mm: args.thickness.unwrap_or(defaults.shelf_thickness_mm),
        waste_pct: args.waste.unwrap_or(defaults.waste_pct),
        prices: UnitPrices {
            post: args.post_price.unwrap_or(base.post),
            beam: args.beam_price.unwrap_or(base.beam),
            shelf: args.shelf_price.unwrap_or(base.shelf),
            fastener_pack: args.fastener_price.unwrap_or(base.fastener_pack),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BomArgs {
        BomArgs {
            height: 2000,
            width: 1000,
            depth: 400,
            sections: 3,
            levels: 5,
            thickness: None,
            waste: Some(0.0),
            post_price: Some(1.0),
            beam_price: None,
            shelf_price: None,
            fastener_price: None,
        }
    }

    #[test]
    fn test_flags_override_configured_defaults() {
        let defaults = BomConfig::default();
        let input = input_from(&args(), &defaults);

        assert_eq!(input.shelf_thickness_mm, defaults.shelf_thickness_mm);
        assert_eq!(input.waste_pct, 0.0);
        assert_eq!(input.prices.post, 1.0);
        assert_eq!(input.prices.beam, defaults.prices.beam);
        assert_eq!(estimate_bom(&input).posts, 8);
    }
}
