use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Geographic scope of a lane endpoint or a benchmark rate.
///
/// Country is always present; state and zip3 are optional refinements. An
/// absent refinement matches anything on the other side of a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoScope {
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip3: Option<String>,
}

impl GeoScope {
    pub fn country(country: impl Into<String>) -> Self {
        Self { country: country.into(), state: None, zip3: None }
    }

    /// Compact label for rendering, e.g. "US-CA-945".
    pub fn label(&self) -> String {
        let mut label = self.country.clone();
        if let Some(state) = &self.state {
            label.push('-');
            label.push_str(state);
        }
        if let Some(zip3) = &self.zip3 {
            label.push('-');
            label.push_str(zip3);
        }
        label
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

/// A benchmark rate from the externally supplied rate catalog.
///
/// Immutable reference data; the engine never mutates or stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRate {
    pub version: String,
    pub mode: String,
    pub service_level: String,
    pub origin: GeoScope,
    pub destination: GeoScope,
    #[serde(default)]
    pub weight_range: Option<QuantityRange>,
    #[serde(default)]
    pub volume_range: Option<QuantityRange>,
    pub unit_of_measure: String,
    pub rate: Decimal,
    pub currency: String,
    pub source: String,
    pub confidence: Decimal,
}

/// A value-added-service or surcharge definition, unique by code within a version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueAddedOption {
    pub version: String,
    pub code: String,
    pub name: String,
    pub pricing_type: String,
    pub unit_of_measure: String,
    pub default_rate: Decimal,
    pub currency: String,
    pub category: String,
    pub confidence: Decimal,
}

/// Read-only pricing reference data supplied per call.
///
/// Lookups are linear scans; the catalogs are small in-memory lists and the
/// scan keeps candidate ordering observable for the resolver's stable sort.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    pub version: String,
    pub currency: String,
    #[serde(default)]
    pub rates: Vec<BenchmarkRate>,
    #[serde(default)]
    pub options: Vec<ValueAddedOption>,
}

impl PricingContext {
    pub fn new(
        version: impl Into<String>,
        currency: impl Into<String>,
        rates: Vec<BenchmarkRate>,
        options: Vec<ValueAddedOption>,
    ) -> Self {
        Self { version: version.into(), currency: currency.into(), rates, options }
    }

    pub fn find_option(&self, code: &str) -> Option<&ValueAddedOption> {
        self.options.iter().find(|option| option.code == code)
    }
}
