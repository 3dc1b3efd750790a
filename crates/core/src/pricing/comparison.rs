use rust_decimal::Decimal;

use crate::domain::quote::{CompetitorBaseline, QuoteComparison};
use crate::rounding::MoneyRounding;

/// Contrast the computed grand total against a competitor baseline.
///
/// The percent delta is guarded against a non-positive baseline so the
/// result is always finite.
pub fn compare(
    grand_total: Decimal,
    baseline: &CompetitorBaseline,
    rounding: MoneyRounding,
) -> QuoteComparison {
    let delta_amount = rounding.round(grand_total - baseline.amount);
    let delta_percent = if baseline.amount > Decimal::ZERO {
        rounding.round(delta_amount / baseline.amount * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    QuoteComparison {
        competitor: baseline.label.clone(),
        competitor_amount: baseline.amount,
        delta_amount,
        delta_percent,
    }
}
