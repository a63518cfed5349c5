//! Per-seller running accumulators
//!
//! A `SellerStat` is created for every input seller, mutated by the
//! aggregator, and consumed by the finalizer. Money accumulates at full
//! `Decimal` precision. Every update is checked; `None` means the total left
//! the representable range and the accumulator must be discarded.

use std::collections::HashMap;

use rust_decimal::Decimal;
use types::ids::{SellerId, Sku};
use types::report::TopProduct;
use types::seller::Seller;

/// Units sold per SKU, remembering the order SKUs were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    slots: HashMap<Sku, usize>,
    entries: Vec<TopProduct>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `sku`, creating the entry if absent.
    pub fn add(&mut self, sku: &Sku, quantity: u64) -> Option<()> {
        match self.slots.get(sku) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.quantity = entry.quantity.checked_add(quantity)?;
            }
            None => {
                self.slots.insert(sku.clone(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.clone(),
                    quantity,
                });
            }
        }
        Some(())
    }

    /// Units recorded for `sku` (zero if never seen)
    pub fn quantity(&self, sku: &Sku) -> u64 {
        self.slots
            .get(sku)
            .map(|&slot| self.entries[slot].quantity)
            .unwrap_or(0)
    }

    /// Number of distinct SKUs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` highest-quantity entries, quantity descending.
    ///
    /// Equal quantities keep first-seen order (stable sort).
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

/// Mutable accumulator for one seller
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub seller_id: SellerId,
    pub name: String,
    /// Sum of record `total_amount`
    pub revenue: Decimal,
    pub profit: Decimal,
    /// Sum of item-level revenue
    pub item_revenue: Decimal,
    pub sales_count: u64,
    pub products_sold: ProductTally,
    pub bonus: Decimal,
}

impl SellerStat {
    /// Zeroed accumulator for an input seller
    pub fn from_seller(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            item_revenue: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::new(),
            bonus: Decimal::ZERO,
        }
    }

    /// Count one purchase record and its record-level amount.
    pub fn record_sale(&mut self, total_amount: Decimal) -> Option<()> {
        self.sales_count = self.sales_count.checked_add(1)?;
        self.revenue = self.revenue.checked_add(total_amount)?;
        Some(())
    }

    /// Fold one line item's economics into the accumulator.
    pub fn record_item(
        &mut self,
        sku: &Sku,
        quantity: u64,
        item_revenue: Decimal,
        cost: Decimal,
    ) -> Option<()> {
        let profit = item_revenue.checked_sub(cost)?;
        self.item_revenue = self.item_revenue.checked_add(item_revenue)?;
        self.profit = self.profit.checked_add(profit)?;
        self.products_sold.add(sku, quantity)
    }
}
