use crate::build_configuration::domain::{
    Pricing, PriceFormat, PriceKind, PriceRating, PriceSummary, Selection,
};

/// Used price at least this share below new is rated Great
const GREAT_SAVINGS_RATIO: f64 = 0.4;

/// Used price at least this share below new is rated Good
const GOOD_SAVINGS_RATIO: f64 = 0.2;

/// PriceAnalyzer service - totals, ratings and display formatting
pub struct PriceAnalyzer;

impl PriceAnalyzer {
    /// Sums one price kind across every selected component
    pub fn total_price(selection: &Selection, kind: PriceKind) -> f64 {
        selection
            .components()
            .iter()
            .map(|c| Self::price_of(c.pricing(), kind))
            .sum()
    }

    pub fn summarize(selection: &Selection) -> PriceSummary {
        PriceSummary::new(
            Self::total_price(selection, PriceKind::New),
            Self::total_price(selection, PriceKind::Used),
        )
    }

    /// Rates the saving of buying used instead of new
    ///
    /// Thresholds are inclusive: a saving of exactly 40% is Great,
    /// exactly 20% is Good. A negative saving is Poor.
    pub fn price_rating(price_new: f64, price_used: f64) -> PriceRating {
        let diff = price_new - price_used;
        if diff >= price_new * GREAT_SAVINGS_RATIO {
            PriceRating::Great
        } else if diff >= price_new * GOOD_SAVINGS_RATIO {
            PriceRating::Good
        } else {
            PriceRating::Poor
        }
    }

    /// Renders a price as a grouped integer with currency suffix
    ///
    /// Fractions are truncated toward zero, never rounded:
    /// `999.9` renders as `999 kr`.
    pub fn format_price(value: f64, format: &PriceFormat) -> String {
        let truncated = value.trunc();
        let sign = if truncated < 0.0 { "-" } else { "" };
        // `as` saturates for out-of-range floats
        let digits = (truncated.abs() as u64).to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(format.thousands_separator());
            }
            grouped.push(ch);
        }

        format!("{}{} {}", sign, grouped, format.currency_suffix())
    }

    fn price_of(pricing: Pricing, kind: PriceKind) -> f64 {
        match kind {
            PriceKind::New => pricing.new_price(),
            PriceKind::Used => pricing.used_price(),
        }
    }
}
