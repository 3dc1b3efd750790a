use rust_decimal::Decimal;

use crate::domain::catalog::PricingContext;
use crate::domain::quote::{LineCategory, QuoteInput, QuoteLine, ServiceRequest};
use crate::pricing::resolver::{find_rate, resolve_lane_rates};
use crate::rounding::MoneyRounding;

const RECEIVING_CODE: &str = "RCV_STD";
const FULFILLMENT_CODE: &str = "PICK_PACK";
const STORAGE_CODE: &str = "STOR_STD";

/// Build the priced lines for every requested category.
///
/// Each category is handled independently: an absent input field or an
/// unresolvable rate yields no line for that category, never an error.
pub fn build_lines(
    input: &QuoteInput,
    context: &PricingContext,
    rounding: MoneyRounding,
) -> Vec<QuoteLine> {
    let candidates = resolve_lane_rates(&input.lane, &context.rates);
    let mut lines = Vec::new();

    if let Some(units) = input.volumes.units_received {
        if let Some(rate) = find_rate(&candidates, "receiving", "standard") {
            lines.push(priced_line(
                LineCategory::Receiving,
                RECEIVING_CODE,
                units,
                "per unit",
                rate.rate,
                true,
                rounding,
            ));
        }
    }

    if let Some(orders) = input.volumes.orders_shipped {
        if let Some(rate) = find_rate(&candidates, "fulfillment", "pick_pack") {
            lines.push(priced_line(
                LineCategory::Fulfillment,
                FULFILLMENT_CODE,
                orders,
                "per order",
                rate.rate,
                true,
                rounding,
            ));
        }
    }

    if let Some(months) = input.assumptions.storage_months {
        if let Some(rate) = find_rate(&candidates, "storage", "standard") {
            lines.push(priced_line(
                LineCategory::Storage,
                STORAGE_CODE,
                months,
                "per month",
                rate.rate,
                true,
                rounding,
            ));
        }
    }

    lines.extend(option_lines(&input.vas, context, LineCategory::Vas, true, rounding));
    lines.extend(option_lines(
        &input.surcharges,
        context,
        LineCategory::Surcharge,
        false,
        rounding,
    ));

    lines
}

/// VAS and surcharge lines share lookup-and-emit logic; only the category and
/// discountable flag differ. Unknown codes are silently skipped.
fn option_lines(
    requests: &[ServiceRequest],
    context: &PricingContext,
    category: LineCategory,
    discountable: bool,
    rounding: MoneyRounding,
) -> Vec<QuoteLine> {
    requests
        .iter()
        .filter_map(|request| {
            context.find_option(&request.code).map(|option| {
                priced_line(
                    category,
                    &option.code,
                    request.quantity,
                    &option.unit_of_measure,
                    option.default_rate,
                    discountable,
                    rounding,
                )
            })
        })
        .collect()
}

fn priced_line(
    category: LineCategory,
    code: &str,
    quantity: u32,
    unit_of_measure: &str,
    rate: Decimal,
    discountable: bool,
    rounding: MoneyRounding,
) -> QuoteLine {
    QuoteLine {
        category,
        code: code.to_owned(),
        quantity,
        unit_of_measure: unit_of_measure.to_owned(),
        rate,
        amount: rounding.round(rate * Decimal::from(quantity)),
        discountable,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::catalog::{BenchmarkRate, GeoScope, PricingContext, ValueAddedOption};
    use crate::domain::quote::{
        Assumptions, Lane, LineCategory, QuoteInput, ServiceRequest, Volumes,
    };
    use crate::rounding::MoneyRounding;

    use super::build_lines;

    fn catalog_rate(mode: &str, service_level: &str, rate: Decimal) -> BenchmarkRate {
        BenchmarkRate {
            version: "2026-Q1".to_owned(),
            mode: mode.to_owned(),
            service_level: service_level.to_owned(),
            origin: GeoScope::country("US"),
            destination: GeoScope::country("US"),
            weight_range: None,
            volume_range: None,
            unit_of_measure: "per unit".to_owned(),
            rate,
            currency: "USD".to_owned(),
            source: "benchmark".to_owned(),
            confidence: Decimal::new(90, 2),
        }
    }

    fn catalog_option(code: &str, category: &str, default_rate: Decimal) -> ValueAddedOption {
        ValueAddedOption {
            version: "2026-Q1".to_owned(),
            code: code.to_owned(),
            name: code.to_owned(),
            pricing_type: "per_unit".to_owned(),
            unit_of_measure: "per unit".to_owned(),
            default_rate,
            currency: "USD".to_owned(),
            category: category.to_owned(),
            confidence: Decimal::new(90, 2),
        }
    }

    fn context() -> PricingContext {
        PricingContext::new(
            "2026-Q1",
            "USD",
            vec![
                catalog_rate("receiving", "standard", Decimal::new(125, 2)),
                catalog_rate("fulfillment", "pick_pack", Decimal::new(375, 2)),
                catalog_rate("storage", "standard", Decimal::new(1800, 2)),
            ],
            vec![
                catalog_option("KITTING", "vas", Decimal::new(75, 2)),
                catalog_option("FUEL_SURCHARGE", "surcharge", Decimal::new(2500, 2)),
            ],
        )
    }

    fn input() -> QuoteInput {
        QuoteInput {
            version: "2026-Q1".to_owned(),
            lane: Lane {
                origin: GeoScope::country("US"),
                destination: GeoScope::country("US"),
            },
            volumes: Volumes { units_received: Some(1000), orders_shipped: Some(500) },
            vas: Vec::new(),
            surcharges: Vec::new(),
            discounts: Vec::new(),
            assumptions: Assumptions::default(),
            competitor: None,
        }
    }

    #[test]
    fn receiving_and_fulfillment_lines_price_from_resolved_rates() {
        let lines = build_lines(&input(), &context(), MoneyRounding::default());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].code, "RCV_STD");
        assert_eq!(lines[0].amount, Decimal::new(125_000, 2));
        assert_eq!(lines[0].unit_of_measure, "per unit");
        assert!(lines[0].discountable);
        assert_eq!(lines[1].code, "PICK_PACK");
        assert_eq!(lines[1].amount, Decimal::new(187_500, 2));
        assert_eq!(lines[1].unit_of_measure, "per order");
    }

    #[test]
    fn storage_line_requires_the_storage_months_assumption() {
        let mut with_storage = input();
        with_storage.assumptions.storage_months = Some(3);

        let lines = build_lines(&with_storage, &context(), MoneyRounding::default());
        let storage = lines
            .iter()
            .find(|line| line.category == LineCategory::Storage)
            .expect("storage line");
        assert_eq!(storage.code, "STOR_STD");
        assert_eq!(storage.quantity, 3);
        assert_eq!(storage.unit_of_measure, "per month");
        assert_eq!(storage.amount, Decimal::new(5400, 2));
    }

    #[test]
    fn unresolvable_rate_omits_the_line_without_error() {
        let mut no_fulfillment = context();
        no_fulfillment.rates.retain(|rate| rate.mode != "fulfillment");

        let lines = build_lines(&input(), &no_fulfillment, MoneyRounding::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, LineCategory::Receiving);
    }

    #[test]
    fn vas_lines_are_discountable_and_surcharges_are_not() {
        let mut with_options = input();
        with_options.vas = vec![ServiceRequest { code: "KITTING".to_owned(), quantity: 200 }];
        with_options.surcharges =
            vec![ServiceRequest { code: "FUEL_SURCHARGE".to_owned(), quantity: 1 }];

        let lines = build_lines(&with_options, &context(), MoneyRounding::default());
        let vas = lines.iter().find(|line| line.category == LineCategory::Vas).expect("vas");
        assert!(vas.discountable);
        assert_eq!(vas.amount, Decimal::new(15_000, 2));

        let surcharge = lines
            .iter()
            .find(|line| line.category == LineCategory::Surcharge)
            .expect("surcharge");
        assert!(!surcharge.discountable);
        assert_eq!(surcharge.amount, Decimal::new(2500, 2));
    }

    #[test]
    fn unknown_option_codes_are_silently_skipped() {
        let mut with_unknown = input();
        with_unknown.volumes = Volumes::default();
        with_unknown.vas = vec![ServiceRequest { code: "NOT_A_CODE".to_owned(), quantity: 5 }];

        let lines = build_lines(&with_unknown, &context(), MoneyRounding::default());
        assert!(lines.is_empty());
    }
}
