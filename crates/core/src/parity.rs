use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::quote::QuoteTotals;
use crate::exports::{ExportFormat, RenderedExport};

/// A figure that diverged between the UI-computed totals and an export's
/// rendered content. `difference` is export minus UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityDiscrepancy {
    pub field: String,
    pub ui_value: Decimal,
    pub export_value: Decimal,
    pub difference: Decimal,
}

/// Per-format parity verdict. Advisory only: a mismatch is surfaced to the
/// operator, it never blocks rendering or export delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParityResult {
    pub format: ExportFormat,
    pub matches: bool,
    pub discrepancies: Vec<ParityDiscrepancy>,
    pub digest: String,
}

/// Absolute tolerance, in currency units, below which extracted and
/// UI-computed figures are considered equal.
pub fn parity_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Verify one rendered export against the UI-computed totals.
///
/// The grand total must be recoverable from the content; an absent label is
/// itself a discrepancy (export value 0). Taxes and the pre-discount
/// subtotal are compared when their labels are present.
pub fn check_export(totals: &QuoteTotals, export: &RenderedExport) -> ExportParityResult {
    let mut discrepancies = Vec::new();

    match extract_amount(&export.content, grand_total_pattern()) {
        Some(found) => {
            record_if_diverged("grand_total", totals.grand_total, found, &mut discrepancies);
        }
        None => discrepancies.push(ParityDiscrepancy {
            field: "grand_total".to_owned(),
            ui_value: totals.grand_total,
            export_value: Decimal::ZERO,
            difference: Decimal::ZERO - totals.grand_total,
        }),
    }

    if let Some(found) = extract_amount(&export.content, taxes_pattern()) {
        record_if_diverged("taxes", totals.taxes, found, &mut discrepancies);
    }
    if let Some(found) = extract_amount(&export.content, before_discounts_pattern()) {
        record_if_diverged(
            "before_discounts",
            totals.before_discounts,
            found,
            &mut discrepancies,
        );
    }

    ExportParityResult {
        format: export.format,
        matches: discrepancies.is_empty(),
        discrepancies,
        digest: export.digest.clone(),
    }
}

/// Verify a set of rendered exports, one verdict per format.
pub fn check_exports(totals: &QuoteTotals, exports: &[RenderedExport]) -> Vec<ExportParityResult> {
    exports.iter().map(|export| check_export(totals, export)).collect()
}

fn record_if_diverged(
    field: &str,
    ui_value: Decimal,
    export_value: Decimal,
    discrepancies: &mut Vec<ParityDiscrepancy>,
) {
    let difference = export_value - ui_value;
    if difference.abs() > parity_tolerance() {
        discrepancies.push(ParityDiscrepancy {
            field: field.to_owned(),
            ui_value,
            export_value,
            difference,
        });
    }
}

fn extract_amount(content: &str, pattern: &Regex) -> Option<Decimal> {
    let raw = pattern.captures(content)?.get(1)?.as_str().replace(',', "");
    Decimal::from_str(&raw).ok()
}

fn grand_total_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| labeled_amount("grand total"))
}

fn taxes_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| labeled_amount("taxes"))
}

fn before_discounts_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| labeled_amount("before discounts"))
}

/// Case-insensitive label followed by the first numeric figure on the line,
/// tolerant of the separators each export layout uses (": $", CSV commas).
fn labeled_amount(label: &str) -> Regex {
    let pattern = format!(r"(?i){label}[^0-9\r\n-]*(-?[0-9][0-9,]*(?:\.[0-9]+)?)");
    Regex::new(&pattern).expect("static label pattern")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::quote::QuoteTotals;
    use crate::exports::fixtures::result_fixture;
    use crate::exports::{digest, render_all, ExportFormat, RenderedExport};

    use super::{check_export, check_exports};

    fn totals(grand_total: Decimal) -> QuoteTotals {
        QuoteTotals {
            before_discounts: grand_total,
            discounts_total: Decimal::ZERO,
            after_discounts: grand_total,
            taxes: Decimal::ZERO,
            grand_total,
        }
    }

    fn export(content: &str) -> RenderedExport {
        RenderedExport {
            format: ExportFormat::PdfText,
            content: content.to_owned(),
            digest: digest::content_digest(content),
        }
    }

    #[test]
    fn matching_grand_total_passes() {
        let result = check_export(
            &totals(Decimal::new(102_600, 2)),
            &export("Totals\nGrand Total: $1026.00\n"),
        );
        assert!(result.matches);
        assert!(result.discrepancies.is_empty());
    }

    #[test]
    fn diverging_grand_total_reports_the_difference() {
        let result = check_export(
            &totals(Decimal::new(102_600, 2)),
            &export("Grand Total: $1000.00"),
        );

        assert!(!result.matches);
        assert_eq!(result.discrepancies.len(), 1);
        let discrepancy = &result.discrepancies[0];
        assert_eq!(discrepancy.field, "grand_total");
        assert_eq!(discrepancy.ui_value, Decimal::new(102_600, 2));
        assert_eq!(discrepancy.export_value, Decimal::new(100_000, 2));
        assert_eq!(discrepancy.difference, Decimal::new(-2_600, 2));
    }

    #[test]
    fn divergence_within_tolerance_passes() {
        let result = check_export(
            &totals(Decimal::new(102_600, 2)),
            &export("Grand Total: $1026.01"),
        );
        assert!(result.matches);
    }

    #[test]
    fn missing_grand_total_label_is_a_discrepancy() {
        let result =
            check_export(&totals(Decimal::new(102_600, 2)), &export("Totals: redacted"));
        assert!(!result.matches);
        assert_eq!(result.discrepancies[0].field, "grand_total");
        assert_eq!(result.discrepancies[0].export_value, Decimal::ZERO);
        assert_eq!(result.discrepancies[0].difference, Decimal::new(-102_600, 2));
    }

    #[test]
    fn uppercase_pdf_label_is_extracted() {
        let result = check_export(
            &totals(Decimal::new(339_063, 2)),
            &export("Totals\n  GRAND TOTAL: $3390.63\n"),
        );
        assert!(result.matches);
    }

    #[test]
    fn all_rendered_formats_pass_against_their_own_totals() {
        let quote = result_fixture();
        let exports = render_all(&quote).expect("render");
        let verdicts = check_exports(&quote.totals, &exports);

        assert_eq!(verdicts.len(), 3);
        for verdict in &verdicts {
            assert!(verdict.matches, "format {} diverged", verdict.format);
            assert_eq!(verdict.digest.len(), 64);
        }
    }

    #[test]
    fn tampered_export_content_is_flagged_per_format() {
        let quote = result_fixture();
        let exports = render_all(&quote).expect("render");
        let tampered: Vec<RenderedExport> = exports
            .into_iter()
            .map(|mut export| {
                export.content = export.content.replace("3390.63", "3400.00");
                export
            })
            .collect();

        for verdict in check_exports(&quote.totals, &tampered) {
            assert!(!verdict.matches);
            assert!(verdict
                .discrepancies
                .iter()
                .any(|discrepancy| discrepancy.field == "grand_total"));
        }
    }
}
