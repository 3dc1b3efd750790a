use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Midpoint handling for monetary rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round the midpoint away from zero (2.345 -> 2.35).
    #[default]
    HalfUp,
    /// Round the midpoint to the nearest even digit (2.345 -> 2.34).
    HalfEven,
}

/// Monetary rounding policy: mode and precision are fixed at construction.
///
/// Every monetary computation in the engine must route through [`MoneyRounding::round`]
/// so that totals reproduce bit-for-bit given the same mode. Callers needing a
/// different policy construct a separate engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRounding {
    mode: RoundingMode,
    precision: u32,
}

impl MoneyRounding {
    pub const DEFAULT_PRECISION: u32 = 2;

    pub fn new(mode: RoundingMode) -> Self {
        Self { mode, precision: Self::DEFAULT_PRECISION }
    }

    pub fn with_precision(mode: RoundingMode, precision: u32) -> Self {
        Self { mode, precision }
    }

    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn round(&self, value: Decimal) -> Decimal {
        let strategy = match self.mode {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        value.round_dp_with_strategy(self.precision, strategy)
    }
}

impl Default for MoneyRounding {
    fn default() -> Self {
        Self::new(RoundingMode::default())
    }
}
