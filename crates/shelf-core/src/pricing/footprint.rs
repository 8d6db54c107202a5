//! Area-based placeholder formula.

use crate::section::Section;

/// Price per square metre of shelf area used when nothing else is configured.
pub const DEFAULT_PRICE_PER_M2: f64 = 1000.0;

/// Area and total for a list of sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintQuote {
    pub area_m2: f64,
    pub total: f64,
}

/// Shelf area of one section: width × depth × levels, in m².
pub fn section_area_m2(section: &Section) -> f64 {
    (f64::from(section.width_mm) / 1000.0)
        * (f64::from(section.depth_mm) / 1000.0)
        * f64::from(section.levels_count)
}

/// Sums shelf area over `sections` and multiplies by `price_per_m2`.
///
/// An empty list yields zero.
pub fn footprint_quote(sections: &[Section], price_per_m2: f64) -> FootprintQuote {
    let area_m2: f64 = sections.iter().map(section_area_m2).sum();
    FootprintQuote {
        area_m2,
        total: area_m2 * price_per_m2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(width_mm: u32, depth_mm: u32, levels_count: u32) -> Section {
        Section {
            width_mm,
            depth_mm,
            levels_count,
            ..Section::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_section_scenario() {
        let quote = footprint_quote(&[section(1000, 400, 5)], 1000.0);
        assert!(close(quote.area_m2, 2.0));
        assert!(close(quote.total, 2000.0));
    }

    #[test]
    fn test_empty_list_is_zero() {
        let quote = footprint_quote(&[], DEFAULT_PRICE_PER_M2);
        assert_eq!(quote.area_m2, 0.0);
        assert_eq!(quote.total, 0.0);
    }

    #[test]
    fn test_sums_over_sections() {
        let quote = footprint_quote(&[section(1000, 400, 5), section(500, 500, 4)], 100.0);
        assert!(close(quote.area_m2, 3.0));
        assert!(close(quote.total, 300.0));
    }

    #[test]
    fn test_same_input_same_output() {
        let sections = vec![section(1200, 600, 6), section(700, 300, 3)];
        assert_eq!(
            footprint_quote(&sections, 950.0),
            footprint_quote(&sections, 950.0)
        );
    }

    #[test]
    fn test_monotonic_in_levels_width_depth() {
        let base = section(1000, 400, 5);
        let price = |s: Section| footprint_quote(&[s], 1000.0).total;

        for step in 0..20u32 {
            assert!(price(section(1000, 400, step)) <= price(section(1000, 400, step + 1)));
            assert!(price(section(step * 100, 400, 5)) <= price(section((step + 1) * 100, 400, 5)));
            assert!(price(section(1000, step * 50, 5)) <= price(section(1000, (step + 1) * 50, 5)));
        }
        assert!(price(base.clone()) > 0.0);
    }

    #[test]
    fn test_zero_levels_contributes_nothing() {
        let quote = footprint_quote(&[section(1000, 400, 0)], 1000.0);
        assert_eq!(quote.total, 0.0);
    }
}
