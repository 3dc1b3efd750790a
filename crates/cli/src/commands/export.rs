use std::path::Path;

use c3pl_core::exports;
use c3pl_core::{ExportFormat, QuoteResult};

use crate::commands::{read_json, CommandResult};

pub fn run(quote_path: &Path, format: &str) -> CommandResult {
    let format: ExportFormat = match format.parse() {
        Ok(format) => format,
        Err(error) => return CommandResult::failure("export", "format", format!("{error}"), 2),
    };
    let quote: QuoteResult = match read_json(quote_path) {
        Ok(quote) => quote,
        Err(error) => {
            return CommandResult::failure("export", "quote_decode", format!("{error:#}"), 2)
        }
    };

    let rendered = match exports::render(&quote, format) {
        Ok(rendered) => rendered,
        Err(error) => return CommandResult::failure("export", "render", error.to_string(), 1),
    };

    match serde_json::to_string_pretty(&rendered) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("export", "serialization", error.to_string(), 1),
    }
}
