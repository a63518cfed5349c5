//! Purchase records and line items
//!
//! A purchase record is one transaction attributed to a seller. Its
//! `total_amount` is the record-level revenue reported by the source; the
//! line items carry the fine-grained economics used for profit.

use crate::ids::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: Sku,
    /// Discount percentage, nominally in [0, 100]; not clamped
    pub discount: Decimal,
    pub sale_price: Decimal,
    pub quantity: u64,
}

impl PurchaseItem {
    pub fn new(sku: impl Into<String>, discount: Decimal, sale_price: Decimal, quantity: u64) -> Self {
        Self {
            sku: Sku::new(sku),
            discount,
            sale_price,
            quantity,
        }
    }
}

/// A single transaction attributed to one seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    pub seller_id: SellerId,
    pub total_amount: Decimal,
    pub items: Vec<PurchaseItem>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<String>, total_amount: Decimal, items: Vec<PurchaseItem>) -> Self {
        Self {
            receipt_id: None,
            seller_id: SellerId::new(seller_id),
            total_amount,
            items,
        }
    }
}
