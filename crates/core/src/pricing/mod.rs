pub mod comparison;
pub mod lines;
pub mod resolver;
pub mod totals;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::catalog::PricingContext;
use crate::domain::quote::{QuoteInput, QuoteResult};
use crate::rounding::{MoneyRounding, RoundingMode};

/// The quote pricing engine.
///
/// The rounding policy is the engine's only state and is fixed at
/// construction; `generate_quote` is a pure function of its arguments, so
/// independent inputs may be priced concurrently with no coordination.
/// Callers needing a different rounding policy construct a separate engine.
#[derive(Clone, Copy, Debug)]
pub struct QuotePricingEngine {
    rounding: MoneyRounding,
}

impl QuotePricingEngine {
    pub fn new(mode: RoundingMode) -> Self {
        Self { rounding: MoneyRounding::new(mode) }
    }

    pub fn with_rounding(rounding: MoneyRounding) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> MoneyRounding {
        self.rounding
    }

    pub fn generate_quote(&self, input: &QuoteInput, context: &PricingContext) -> QuoteResult {
        let lines = lines::build_lines(input, context, self.rounding);
        let totals = totals::calculate_totals(&lines, &input.discounts, self.rounding);
        let comparison = input
            .competitor
            .as_ref()
            .map(|baseline| comparison::compare(totals.grand_total, baseline, self.rounding));

        QuoteResult {
            quote_id: Uuid::new_v4().to_string(),
            version: input.version.clone(),
            currency: context.currency.clone(),
            lane: input.lane.clone(),
            lines,
            totals,
            comparison,
            generated_at: Utc::now(),
        }
    }
}

impl Default for QuotePricingEngine {
    fn default() -> Self {
        Self::new(RoundingMode::HalfUp)
    }
}
