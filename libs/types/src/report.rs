//! Finalized report records
//!
//! A report is the ranked sequence of per-seller summaries. Index 0 is the
//! top performer by profit.

use crate::ids::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A top-selling product entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Finalized performance summary for one seller
///
/// Monetary fields are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    /// Sum of record-level `total_amount`
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Sum of item-level revenue from the revenue formula
    pub item_revenue: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}

/// Ranked per-seller summaries, sorted by profit descending
pub type Report = Vec<SellerReport>;
