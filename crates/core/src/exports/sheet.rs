use crate::domain::quote::QuoteResult;
use crate::exports::csv;

/// Marker line that tells the download layer to materialize a spreadsheet
/// instead of a plain CSV file.
pub const SHEET_MARKER: &str = "#C3PL-SHEET v1";

/// Spreadsheet-equivalent layout: the CSV content behind a format marker.
pub fn render(result: &QuoteResult) -> Result<String, std::fmt::Error> {
    let body = csv::render(result)?;
    Ok(format!("{SHEET_MARKER}\n{body}"))
}

#[cfg(test)]
mod tests {
    use crate::exports::fixtures::result_fixture;

    use super::{render, SHEET_MARKER};

    #[test]
    fn sheet_is_marker_plus_csv_body() {
        let result = result_fixture();
        let content = render(&result).expect("render");
        let csv_body = crate::exports::csv::render(&result).expect("render");

        assert!(content.starts_with(SHEET_MARKER));
        assert_eq!(&content[SHEET_MARKER.len() + 1..], csv_body.as_str());
    }
}
