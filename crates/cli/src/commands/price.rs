use std::path::Path;

use c3pl_core::{PricingContext, QuoteInput, QuotePricingEngine, RoundingMode};

use crate::commands::{read_json, CommandResult};

pub fn run(input_path: &Path, context_path: &Path, mode: RoundingMode) -> CommandResult {
    let input: QuoteInput = match read_json(input_path) {
        Ok(input) => input,
        Err(error) => {
            return CommandResult::failure("price", "input_decode", format!("{error:#}"), 2)
        }
    };
    let context: PricingContext = match read_json(context_path) {
        Ok(context) => context,
        Err(error) => {
            return CommandResult::failure("price", "context_decode", format!("{error:#}"), 2)
        }
    };

    let engine = QuotePricingEngine::new(mode);
    let result = engine.generate_quote(&input, &context);

    match serde_json::to_string_pretty(&result) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("price", "serialization", error.to_string(), 1),
    }
}
