use std::path::{Path, PathBuf};

use c3pl_core::parity;
use c3pl_core::{ExportParityResult, QuoteResult, RenderedExport};
use serde::Serialize;

use crate::commands::{read_json, CommandResult};

#[derive(Debug, Serialize)]
struct ParityReport {
    command: &'static str,
    status: &'static str,
    checked: usize,
    matched: usize,
    results: Vec<ExportParityResult>,
}

/// Parity is advisory: mismatches are reported in the payload but the
/// command still exits 0 so export delivery pipelines are never blocked.
pub fn run(quote_path: &Path, export_paths: &[PathBuf]) -> CommandResult {
    let quote: QuoteResult = match read_json(quote_path) {
        Ok(quote) => quote,
        Err(error) => {
            return CommandResult::failure("parity", "quote_decode", format!("{error:#}"), 2)
        }
    };

    let mut exports: Vec<RenderedExport> = Vec::with_capacity(export_paths.len());
    for path in export_paths {
        match read_json(path) {
            Ok(export) => exports.push(export),
            Err(error) => {
                return CommandResult::failure("parity", "export_decode", format!("{error:#}"), 2)
            }
        }
    }

    let results = parity::check_exports(&quote.totals, &exports);
    let matched = results.iter().filter(|result| result.matches).count();
    let report = ParityReport {
        command: "parity",
        status: if matched == results.len() { "ok" } else { "mismatch" },
        checked: results.len(),
        matched,
        results,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("parity", "serialization", error.to_string(), 1),
    }
}
