use rust_decimal::Decimal;

use crate::domain::quote::{
    DiscountBasis, DiscountRequest, DiscountScope, LineCategory, QuoteLine, QuoteTotals,
};
use crate::rounding::MoneyRounding;

/// Flat tax policy: 8.5% of the post-discount subtotal. No jurisdictional
/// logic; jurisdiction-aware taxation is a collaborating system's concern.
pub fn flat_tax_rate() -> Decimal {
    Decimal::new(85, 3)
}

/// Fold priced lines and discount requests into a totals breakdown.
///
/// Flat discounts accumulate before percent discounts (stable partition),
/// but each discount is computed against the static discountable base its
/// own scope selects, not a running remainder. The discount sum is clamped
/// to `before_discounts` so totals never go negative.
pub fn calculate_totals(
    lines: &[QuoteLine],
    discounts: &[DiscountRequest],
    rounding: MoneyRounding,
) -> QuoteTotals {
    let before_discounts = rounding.round(lines.iter().map(|line| line.amount).sum());

    let flat_first = discounts
        .iter()
        .filter(|discount| discount.basis == DiscountBasis::Flat)
        .chain(discounts.iter().filter(|discount| discount.basis == DiscountBasis::Percent));

    let mut discounts_total = Decimal::ZERO;
    for discount in flat_first {
        let applicable: Decimal = lines
            .iter()
            .filter(|line| line.discountable && scope_selects(&discount.apply_to, line))
            .map(|line| line.amount)
            .sum();
        let amount = match discount.basis {
            DiscountBasis::Flat => discount.value.min(applicable),
            DiscountBasis::Percent => {
                rounding.round(applicable * discount.value / Decimal::ONE_HUNDRED)
            }
        };
        discounts_total += amount;
    }

    let discounts_total = rounding.round(discounts_total.min(before_discounts));
    let after_discounts = rounding.round(before_discounts - discounts_total);
    let taxes = rounding.round(after_discounts * flat_tax_rate());
    let grand_total = rounding.round(after_discounts + taxes);

    QuoteTotals { before_discounts, discounts_total, after_discounts, taxes, grand_total }
}

fn scope_selects(scope: &DiscountScope, line: &QuoteLine) -> bool {
    match scope {
        DiscountScope::All => true,
        // Redundant with All while surcharge lines are non-discountable;
        // kept so a future discountable surcharge type changes behavior
        // without an input-format break.
        DiscountScope::NonSurcharges => line.category != LineCategory::Surcharge,
        DiscountScope::Category(name) => line.category.as_str() == name,
        DiscountScope::Unrecognized(_) => false,
    }
}
