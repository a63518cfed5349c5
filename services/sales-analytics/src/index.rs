//! Seller and product lookup tables
//!
//! One zeroed `SellerStat` per input seller, in input order, plus O(1)
//! lookups by seller id and by SKU. Duplicate keys resolve last-write-wins;
//! an earlier seller with a duplicated id keeps its slot in the report but
//! can no longer receive purchases.

use std::collections::HashMap;

use tracing::warn;
use types::data::SalesData;
use types::ids::{SellerId, Sku};
use types::product::Product;

use crate::events::AnalysisEvent;
use crate::stats::SellerStat;

/// Lookup tables for one analysis run
#[derive(Debug)]
pub struct SalesIndex<'a> {
    /// Accumulators, one per input seller, in input order
    sellers: Vec<SellerStat>,
    seller_slots: HashMap<SellerId, usize>,
    products: HashMap<&'a Sku, &'a Product>,
}

impl<'a> SalesIndex<'a> {
    /// Build both indexes from a snapshot.
    ///
    /// Duplicate ids and SKUs are reported through `events`.
    pub fn build(data: &'a SalesData, events: &mut Vec<AnalysisEvent>) -> Self {
        let mut sellers = Vec::with_capacity(data.sellers.len());
        let mut seller_slots = HashMap::with_capacity(data.sellers.len());

        for (slot, seller) in data.sellers.iter().enumerate() {
            sellers.push(SellerStat::from_seller(seller));
            if seller_slots.insert(seller.id.clone(), slot).is_some() {
                warn!(seller_id = %seller.id, "Duplicate seller id, last occurrence wins");
                events.push(AnalysisEvent::DuplicateSeller {
                    seller_id: seller.id.clone(),
                });
            }
        }

        let mut products = HashMap::with_capacity(data.products.len());
        for product in &data.products {
            if products.insert(&product.sku, product).is_some() {
                warn!(sku = %product.sku, "Duplicate product sku, last occurrence wins");
                events.push(AnalysisEvent::DuplicateProduct {
                    sku: product.sku.clone(),
                });
            }
        }

        Self {
            sellers,
            seller_slots,
            products,
        }
    }

    /// Accumulator for a seller id
    pub fn seller_mut(&mut self, seller_id: &SellerId) -> Option<&mut SellerStat> {
        let slot = *self.seller_slots.get(seller_id)?;
        self.sellers.get_mut(slot)
    }

    pub fn seller(&self, seller_id: &SellerId) -> Option<&SellerStat> {
        let slot = *self.seller_slots.get(seller_id)?;
        self.sellers.get(slot)
    }

    /// Product for a SKU
    pub fn product(&self, sku: &Sku) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn seller_count(&self) -> usize {
        self.sellers.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Release the accumulators in input seller order.
    pub fn into_stats(self) -> Vec<SellerStat> {
        self.sellers
    }
}
