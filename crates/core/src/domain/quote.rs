use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::GeoScope;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub origin: GeoScope,
    pub destination: GeoScope,
}

impl Lane {
    /// Rendering label, e.g. "US-CA-945 -> US-TX-750".
    pub fn label(&self) -> String {
        format!("{} -> {}", self.origin.label(), self.destination.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volumes {
    #[serde(default)]
    pub units_received: Option<u32>,
    #[serde(default)]
    pub orders_shipped: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumptions {
    #[serde(default)]
    pub storage_months: Option<u32>,
}

/// A requested value-added service or surcharge, matched by code against the
/// option catalog. Unknown codes are silently skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub code: String,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBasis {
    Flat,
    Percent,
}

/// Which discountable lines a discount applies to.
///
/// Serialized as a plain string: `all`, `non_surcharges`, or `category:<Name>`.
/// Anything else round-trips as `Unrecognized` and selects the empty set, so a
/// bad scope contributes zero rather than failing the quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountScope {
    All,
    NonSurcharges,
    Category(String),
    Unrecognized(String),
}

impl From<String> for DiscountScope {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" => return Self::All,
            "non_surcharges" => return Self::NonSurcharges,
            _ => {}
        }
        if let Some(name) = value.strip_prefix("category:") {
            if !name.is_empty() {
                return Self::Category(name.to_owned());
            }
        }
        Self::Unrecognized(value)
    }
}

impl From<DiscountScope> for String {
    fn from(value: DiscountScope) -> Self {
        match value {
            DiscountScope::All => "all".to_owned(),
            DiscountScope::NonSurcharges => "non_surcharges".to_owned(),
            DiscountScope::Category(name) => format!("category:{name}"),
            DiscountScope::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRequest {
    pub code: String,
    pub basis: DiscountBasis,
    pub value: Decimal,
    pub apply_to: DiscountScope,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorBaseline {
    pub label: String,
    pub amount: Decimal,
    pub currency: String,
}

/// One quote request. Absent optional sections mean "none requested" and
/// never produce an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub version: String,
    pub lane: Lane,
    #[serde(default)]
    pub volumes: Volumes,
    #[serde(default)]
    pub vas: Vec<ServiceRequest>,
    #[serde(default)]
    pub surcharges: Vec<ServiceRequest>,
    #[serde(default)]
    pub discounts: Vec<DiscountRequest>,
    #[serde(default)]
    pub assumptions: Assumptions,
    #[serde(default)]
    pub competitor: Option<CompetitorBaseline>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Receiving,
    Fulfillment,
    Storage,
    Vas,
    Surcharge,
}

impl LineCategory {
    /// Display name used in exports and `category:<Name>` discount scopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receiving => "Receiving",
            Self::Fulfillment => "Fulfillment",
            Self::Storage => "Storage",
            Self::Vas => "VAS",
            Self::Surcharge => "Surcharge",
        }
    }
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced line item. `amount` is rounded at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub category: LineCategory,
    pub code: String,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub discountable: bool,
}

/// Aggregated totals. Invariants:
/// `after_discounts = before_discounts - discounts_total`,
/// `grand_total = after_discounts + taxes`,
/// `discounts_total <= before_discounts` (clamped).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub before_discounts: Decimal,
    pub discounts_total: Decimal,
    pub after_discounts: Decimal,
    pub taxes: Decimal,
    pub grand_total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteComparison {
    pub competitor: String,
    pub competitor_amount: Decimal,
    pub delta_amount: Decimal,
    pub delta_percent: Decimal,
}

/// The engine's sole output; owned by the caller, never persisted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quote_id: String,
    pub version: String,
    pub currency: String,
    pub lane: Lane,
    pub lines: Vec<QuoteLine>,
    pub totals: QuoteTotals,
    #[serde(default)]
    pub comparison: Option<QuoteComparison>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{DiscountScope, QuoteInput};

    #[test]
    fn discount_scope_parses_known_and_unknown_values() {
        assert_eq!(DiscountScope::from("all".to_owned()), DiscountScope::All);
        assert_eq!(
            DiscountScope::from("non_surcharges".to_owned()),
            DiscountScope::NonSurcharges
        );
        assert_eq!(
            DiscountScope::from("category:Storage".to_owned()),
            DiscountScope::Category("Storage".to_owned())
        );
        assert_eq!(
            DiscountScope::from("everything".to_owned()),
            DiscountScope::Unrecognized("everything".to_owned())
        );
        assert_eq!(
            DiscountScope::from("category:".to_owned()),
            DiscountScope::Unrecognized("category:".to_owned())
        );
    }

    #[test]
    fn discount_scope_round_trips_through_strings() {
        for raw in ["all", "non_surcharges", "category:VAS", "bogus"] {
            let scope = DiscountScope::from(raw.to_owned());
            assert_eq!(String::from(scope), raw);
        }
    }

    #[test]
    fn quote_input_defaults_absent_sections_to_empty() {
        let input: QuoteInput = serde_json::from_value(serde_json::json!({
            "version": "2026-Q1",
            "lane": {
                "origin": {"country": "US"},
                "destination": {"country": "US"}
            }
        }))
        .expect("minimal input should deserialize");

        assert!(input.vas.is_empty());
        assert!(input.surcharges.is_empty());
        assert!(input.discounts.is_empty());
        assert!(input.volumes.units_received.is_none());
        assert!(input.assumptions.storage_months.is_none());
        assert!(input.competitor.is_none());
    }
}
