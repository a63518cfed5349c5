//! Input and options validation
//!
//! Runs before any processing. Checks performed (in order):
//! 1. `sellers` is non-empty
//! 2. `products` is non-empty
//! 3. `purchase_records` is non-empty
//! 4. Options provide a revenue formula
//! 5. Options provide a bonus formula
//!
//! The first failing check is returned.

use types::data::{SalesData, PRODUCTS, PURCHASE_RECORDS, SELLERS};
use types::errors::AnalysisError;

use crate::config::AnalysisOptions;
use crate::ranking::BonusCalculator;
use crate::revenue::RevenueCalculator;

pub const CALCULATE_REVENUE: &str = "calculate_revenue";
pub const CALCULATE_BONUS: &str = "calculate_bonus";

/// Strategies borrowed from validated options
#[derive(Clone, Copy)]
pub struct Strategies<'a> {
    pub revenue: &'a dyn RevenueCalculator,
    pub bonus: &'a dyn BonusCalculator,
}

/// Validate both the snapshot and the options.
pub fn validate(data: &SalesData, options: &AnalysisOptions) -> Result<(), AnalysisError> {
    validate_data(data)?;
    validate_options(options)
}

/// Reject a snapshot with any empty collection.
pub fn validate_data(data: &SalesData) -> Result<(), AnalysisError> {
    if data.sellers.is_empty() {
        return Err(AnalysisError::empty_collection(SELLERS));
    }
    if data.products.is_empty() {
        return Err(AnalysisError::empty_collection(PRODUCTS));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::empty_collection(PURCHASE_RECORDS));
    }
    Ok(())
}

/// Reject options missing either strategy.
pub fn validate_options(options: &AnalysisOptions) -> Result<(), AnalysisError> {
    resolve_strategies(options).map(|_| ())
}

/// Borrow both strategies, or report the first one missing.
pub fn resolve_strategies(options: &AnalysisOptions) -> Result<Strategies<'_>, AnalysisError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| AnalysisError::InvalidOptions {
            missing: CALCULATE_REVENUE.to_string(),
        })?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| AnalysisError::InvalidOptions {
            missing: CALCULATE_BONUS.to_string(),
        })?;
    Ok(Strategies { revenue, bonus })
}
