pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use c3pl_core::RoundingMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "c3pl",
    about = "C3PL quote pricing operator CLI",
    long_about = "Price 3PL quotes, render deterministic exports, and verify export parity.",
    after_help = "Examples:\n  c3pl price --input quote.json --context catalog.json\n  c3pl export --quote result.json --format csv\n  c3pl parity --quote result.json --export rendered.json\n  c3pl smoke"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price a quote input against a pricing context and emit the result as JSON")]
    Price {
        #[arg(long, help = "Path to the quote input JSON file")]
        input: PathBuf,
        #[arg(long, help = "Path to the pricing context JSON file (rate and VAS catalogs)")]
        context: PathBuf,
        #[arg(long, value_enum, default_value = "half_up", help = "Monetary rounding mode")]
        rounding: RoundingArg,
    },
    #[command(about = "Render a priced quote into one export format with its content digest")]
    Export {
        #[arg(long, help = "Path to a previously priced quote result JSON file")]
        quote: PathBuf,
        #[arg(long, help = "Export format: csv, pdf_text, or sheet")]
        format: String,
    },
    #[command(about = "Verify rendered exports against a quote's computed totals (advisory)")]
    Parity {
        #[arg(long, help = "Path to a previously priced quote result JSON file")]
        quote: PathBuf,
        #[arg(
            long = "export",
            required = true,
            help = "Path to a rendered export JSON file; repeatable"
        )]
        exports: Vec<PathBuf>,
    },
    #[command(about = "Run end-to-end pricing, export, and parity checks with timing details")]
    Smoke,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
enum RoundingArg {
    HalfUp,
    HalfEven,
}

impl From<RoundingArg> for RoundingMode {
    fn from(value: RoundingArg) -> Self {
        match value {
            RoundingArg::HalfUp => RoundingMode::HalfUp,
            RoundingArg::HalfEven => RoundingMode::HalfEven,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Price { input, context, rounding } => {
            commands::price::run(&input, &context, rounding.into())
        }
        Command::Export { quote, format } => commands::export::run(&quote, &format),
        Command::Parity { quote, exports } => commands::parity::run(&quote, &exports),
        Command::Smoke => commands::smoke::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
