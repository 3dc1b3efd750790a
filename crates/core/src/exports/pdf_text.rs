use std::fmt::Write;

use crate::domain::quote::QuoteResult;
use crate::exports::money;

/// Human-readable text layout standing in for the PDF rendering: summary
/// header, lane description, itemized lines, then a totals block ending in
/// the grand total.
pub fn render(result: &QuoteResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "QUOTE SUMMARY")?;
    writeln!(out, "Quote: {}", result.quote_id)?;
    writeln!(out, "Version: {}", result.version)?;
    writeln!(out, "Lane: {}", result.lane.label())?;
    writeln!(out, "Currency: {}", result.currency)?;
    writeln!(out, "Generated: {}", result.generated_at.to_rfc3339())?;

    writeln!(out)?;
    writeln!(out, "Line Items")?;
    for line in &result.lines {
        writeln!(
            out,
            "  {:<12} {} {} @ ${} = ${}",
            line.code,
            line.quantity,
            line.unit_of_measure,
            money(line.rate),
            money(line.amount)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Totals")?;
    writeln!(out, "  Before Discounts: ${}", money(result.totals.before_discounts))?;
    writeln!(out, "  Discounts: ${}", money(result.totals.discounts_total))?;
    writeln!(out, "  After Discounts: ${}", money(result.totals.after_discounts))?;
    writeln!(out, "  Taxes: ${}", money(result.totals.taxes))?;
    writeln!(out, "  GRAND TOTAL: ${}", money(result.totals.grand_total))?;

    if let Some(comparison) = &result.comparison {
        writeln!(out)?;
        writeln!(out, "Comparison")?;
        writeln!(
            out,
            "  Competitor ({}): ${}",
            comparison.competitor,
            money(comparison.competitor_amount)
        )?;
        writeln!(
            out,
            "  Delta: ${} ({}%)",
            money(comparison.delta_amount),
            money(comparison.delta_percent)
        )?;
    }

    Ok(out)
}
