//! Money arithmetic helpers
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Monetary values are accumulated at full precision and rounded to
//! `MONEY_SCALE` decimal places only when a report is finalized.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept in finalized monetary fields.
pub const MONEY_SCALE: u32 = 2;

/// Rounding mode applied to finalized monetary fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyRounding {
    /// Round half away from zero (2.345 → 2.35, -2.345 → -2.35)
    #[default]
    HalfUp,
    /// Banker's rounding (2.345 → 2.34, 2.355 → 2.36)
    HalfEven,
}

impl MoneyRounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            MoneyRounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            MoneyRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round a monetary value to `MONEY_SCALE` places.
    pub fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(MONEY_SCALE, self.strategy())
    }
}

/// Convert a percentage (10 = 10%) into a multiplier fraction (0.1).
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
