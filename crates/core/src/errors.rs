use thiserror::Error;

use crate::exports::ExportFormat;

/// An export format name that is not one of `csv`, `pdf_text`, `sheet`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown export format: {0}")]
pub struct ParseFormatError(pub String);

/// Failure while rendering an export payload. Propagates to the caller as a
/// generation failure; the engine does not retry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render {format} export")]
    Render {
        format: ExportFormat,
        #[source]
        source: std::fmt::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::ParseFormatError;

    #[test]
    fn parse_format_error_names_the_offending_value() {
        let error = ParseFormatError("xml".to_owned());
        assert_eq!(error.to_string(), "unknown export format: xml");
    }
}
