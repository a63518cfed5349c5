//! Report finalization
//!
//! Turns ranked accumulators into report records: money rounded to two
//! places, `top_products` derived from the per-SKU tally, and the tally
//! itself dropped.

use types::numeric::MoneyRounding;
use types::report::{Report, SellerReport};

use crate::stats::SellerStat;

/// Finalize one seller.
pub fn finalize_seller(stat: SellerStat, top_limit: usize, rounding: MoneyRounding) -> SellerReport {
    SellerReport {
        top_products: stat.products_sold.top(top_limit),
        seller_id: stat.seller_id,
        name: stat.name,
        revenue: rounding.round(stat.revenue),
        profit: rounding.round(stat.profit),
        item_revenue: rounding.round(stat.item_revenue),
        sales_count: stat.sales_count,
        bonus: rounding.round(stat.bonus),
    }
}

/// Finalize all sellers, preserving rank order.
pub fn finalize(ranked: Vec<SellerStat>, top_limit: usize, rounding: MoneyRounding) -> Report {
    ranked
        .into_iter()
        .map(|stat| finalize_seller(stat, top_limit, rounding))
        .collect()
}
