pub mod csv;
pub mod digest;
pub mod pdf_text;
pub mod sheet;

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::quote::QuoteResult;
use crate::errors::{ExportError, ParseFormatError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    PdfText,
    Sheet,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Csv, Self::PdfText, Self::Sheet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::PdfText => "pdf_text",
            Self::Sheet => "sheet",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "pdf_text" => Ok(Self::PdfText),
            "sheet" => Ok(Self::Sheet),
            other => Err(ParseFormatError(other.to_owned())),
        }
    }
}

/// A deterministically serialized export payload with its content digest.
/// The digest is for audit/traceability only, never for the parity check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedExport {
    pub format: ExportFormat,
    pub content: String,
    pub digest: String,
}

/// Render one export format from a computed quote result.
///
/// The renderers serialize the actual computed totals; a parity check over
/// placeholder content would be meaningless.
pub fn render(result: &QuoteResult, format: ExportFormat) -> Result<RenderedExport, ExportError> {
    let content = match format {
        ExportFormat::Csv => csv::render(result),
        ExportFormat::PdfText => pdf_text::render(result),
        ExportFormat::Sheet => sheet::render(result),
    }
    .map_err(|source| ExportError::Render { format, source })?;

    let digest = digest::content_digest(&content);
    Ok(RenderedExport { format, content, digest })
}

pub fn render_all(result: &QuoteResult) -> Result<Vec<RenderedExport>, ExportError> {
    ExportFormat::ALL.iter().map(|format| render(result, *format)).collect()
}

/// Two-decimal monetary rendering shared by all formats. Totals arrive
/// already rounded, so this only pads.
pub(crate) fn money(value: Decimal) -> String {
    format!("{value:.2}")
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::fixtures::result_fixture;
    use super::{money, render, render_all, ExportFormat};

    #[test]
    fn format_names_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_str(format.as_str()), Ok(format));
        }
        assert!(ExportFormat::from_str("xml").is_err());
    }

    #[test]
    fn money_pads_to_two_decimals() {
        assert_eq!(money(Decimal::new(339_063, 2)), "3390.63");
        assert_eq!(money(Decimal::new(5, 1)), "0.50");
        assert_eq!(money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn render_all_produces_one_payload_per_format() {
        let exports = render_all(&result_fixture()).expect("render");
        assert_eq!(exports.len(), 3);
        for export in &exports {
            assert!(!export.content.is_empty());
            assert_eq!(export.digest.len(), 64);
        }
    }

    #[test]
    fn digest_is_stable_for_identical_content() {
        let result = result_fixture();
        let first = render(&result, ExportFormat::Csv).expect("render");
        let second = render(&result, ExportFormat::Csv).expect("render");
        assert_eq!(first.digest, second.digest);
    }
}
