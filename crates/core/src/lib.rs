pub mod domain;
pub mod errors;
pub mod exports;
pub mod parity;
pub mod pricing;
pub mod rounding;

pub use domain::catalog::{
    BenchmarkRate, GeoScope, PricingContext, QuantityRange, ValueAddedOption,
};
pub use domain::quote::{
    Assumptions, CompetitorBaseline, DiscountBasis, DiscountRequest, DiscountScope, Lane,
    LineCategory, QuoteComparison, QuoteInput, QuoteLine, QuoteResult, QuoteTotals,
    ServiceRequest, Volumes,
};
pub use errors::{ExportError, ParseFormatError};
pub use exports::{ExportFormat, RenderedExport};
pub use parity::{ExportParityResult, ParityDiscrepancy};
pub use pricing::QuotePricingEngine;
pub use rounding::{MoneyRounding, RoundingMode};
