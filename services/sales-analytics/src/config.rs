//! Analyzer configuration and injected strategies
//!
//! `AnalyzerConfig` holds plain settings and can be loaded from JSON.
//! `AnalysisOptions` carries the two pluggable formulas; both are required
//! and their absence is reported by the validator.

use std::fmt;

use serde::{Deserialize, Serialize};
use types::errors::AnalysisError;
use types::numeric::MoneyRounding;

use crate::ranking::{BonusCalculator, ProfitTierBonus};
use crate::revenue::{RevenueCalculator, SimpleRevenue};

/// Default cap on `top_products` entries per seller
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// What to do when a purchase references an id missing from the indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReferencePolicy {
    /// Abort the run with `UnknownSeller` / `UnknownProduct`
    #[default]
    FailFast,
    /// Drop the record (unknown seller) or item (unknown product) and emit
    /// a diagnostic event
    Skip,
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub unknown_references: UnknownReferencePolicy,
    /// Maximum number of `top_products` entries per seller
    pub top_products_limit: usize,
    /// Rounding applied to finalized monetary fields
    pub rounding: MoneyRounding,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            unknown_references: UnknownReferencePolicy::FailFast,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            rounding: MoneyRounding::HalfUp,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON configuration document. Absent fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(json).map_err(|e| AnalysisError::Config {
            reason: e.to_string(),
        })
    }
}

/// Injected formulas for one analysis run
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    pub calculate_bonus: Option<Box<dyn BonusCalculator>>,
}

impl AnalysisOptions {
    /// Options with no strategies; fails validation until both are set
    pub fn new() -> Self {
        Self::default()
    }

    /// Options wired with `SimpleRevenue` and `ProfitTierBonus`
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitTierBonus::default())
    }

    pub fn with_revenue(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    pub fn with_bonus(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
