use std::fmt::Write;

use crate::domain::quote::QuoteResult;
use crate::exports::money;

/// CSV layout: header row, one row per line item, a labeled totals section,
/// and an optional comparison section.
pub fn render(result: &QuoteResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Category,Code,Quantity,UOM,Rate,Amount,Discountable")?;
    for line in &result.lines {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            line.category,
            line.code,
            line.quantity,
            line.unit_of_measure,
            money(line.rate),
            money(line.amount),
            line.discountable
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Totals,,,,,,")?;
    writeln!(out, "Before Discounts,,,,,{},", money(result.totals.before_discounts))?;
    writeln!(out, "Discounts,,,,,{},", money(result.totals.discounts_total))?;
    writeln!(out, "After Discounts,,,,,{},", money(result.totals.after_discounts))?;
    writeln!(out, "Taxes,,,,,{},", money(result.totals.taxes))?;
    writeln!(out, "Grand Total,,,,,{},", money(result.totals.grand_total))?;

    if let Some(comparison) = &result.comparison {
        writeln!(out)?;
        writeln!(out, "Comparison,,,,,,")?;
        writeln!(
            out,
            "Competitor,{},,,,{},",
            comparison.competitor,
            money(comparison.competitor_amount)
        )?;
        writeln!(out, "Delta,,,,,{},", money(comparison.delta_amount))?;
        writeln!(out, "Delta Percent,,,,,{},", money(comparison.delta_percent))?;
    }

    Ok(out)
}
