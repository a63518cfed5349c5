//! Purchase record aggregation
//!
//! Folds every purchase record, in input order, into its seller's
//! accumulator:
//!
//! - `sales_count += 1`
//! - `revenue += total_amount`
//! - per item: `profit += item_revenue − purchase_price × quantity`
//! - per item: `products_sold[sku] += quantity`
//!
//! All updates are sums, so the order of items inside a record does not
//! affect the result. Arithmetic is checked; a value leaving the `Decimal`
//! or `u64` range fails the pass with `AnalysisError::Overflow`.

use rust_decimal::Decimal;
use tracing::{debug, warn};
use types::errors::AnalysisError;
use types::purchase::PurchaseRecord;

use crate::config::UnknownReferencePolicy;
use crate::events::AnalysisEvent;
use crate::index::SalesIndex;
use crate::revenue::{item_cost, RevenueCalculator};

/// Counters describing one aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    pub records_applied: usize,
    pub records_skipped: usize,
    pub items_applied: usize,
    pub items_skipped: usize,
}

/// Fold all purchase records into the index's seller accumulators.
///
/// Under `FailFast` the first unknown seller or SKU aborts the pass. Under
/// `Skip` the offending record or item is dropped and an event is pushed.
pub fn aggregate(
    index: &mut SalesIndex<'_>,
    records: &[PurchaseRecord],
    revenue: &dyn RevenueCalculator,
    policy: UnknownReferencePolicy,
    events: &mut Vec<AnalysisEvent>,
) -> Result<AggregationSummary, AnalysisError> {
    let mut summary = AggregationSummary::default();

    for (record_index, record) in records.iter().enumerate() {
        if index.seller(&record.seller_id).is_none() {
            match policy {
                UnknownReferencePolicy::FailFast => {
                    return Err(AnalysisError::UnknownSeller {
                        seller_id: record.seller_id.to_string(),
                        record_index,
                    });
                }
                UnknownReferencePolicy::Skip => {
                    warn!(
                        record_index,
                        seller_id = %record.seller_id,
                        receipt_id = record.receipt_id.as_deref().unwrap_or("-"),
                        "Unknown seller, skipping purchase record"
                    );
                    events.push(AnalysisEvent::RecordSkipped {
                        record_index,
                        seller_id: record.seller_id.clone(),
                    });
                    summary.records_skipped += 1;
                    continue;
                }
            }
        }

        apply_record(index, record_index, record, revenue, policy, events, &mut summary)?;
        summary.records_applied += 1;
    }

    debug!(
        records_applied = summary.records_applied,
        records_skipped = summary.records_skipped,
        items_applied = summary.items_applied,
        items_skipped = summary.items_skipped,
        "Aggregation complete"
    );

    Ok(summary)
}

/// Apply one record whose seller is known to be indexed.
fn apply_record(
    index: &mut SalesIndex<'_>,
    record_index: usize,
    record: &PurchaseRecord,
    revenue: &dyn RevenueCalculator,
    policy: UnknownReferencePolicy,
    events: &mut Vec<AnalysisEvent>,
    summary: &mut AggregationSummary,
) -> Result<(), AnalysisError> {
    // Resolve every item before touching the accumulator
    let mut lines = Vec::with_capacity(record.items.len());
    for item in &record.items {
        match index.product(&item.sku) {
            Some(product) => {
                let item_revenue = revenue
                    .revenue(item, product)
                    .ok_or_else(|| AnalysisError::record_overflow(record_index))?;
                let cost = item_cost(item, product)
                    .ok_or_else(|| AnalysisError::record_overflow(record_index))?;
                lines.push((item, item_revenue, cost));
            }
            None => match policy {
                UnknownReferencePolicy::FailFast => {
                    return Err(AnalysisError::UnknownProduct {
                        sku: item.sku.to_string(),
                        record_index,
                    });
                }
                UnknownReferencePolicy::Skip => {
                    warn!(
                        record_index,
                        sku = %item.sku,
                        "Unknown product, skipping purchase item"
                    );
                    events.push(AnalysisEvent::ItemSkipped {
                        record_index,
                        sku: item.sku.clone(),
                    });
                    summary.items_skipped += 1;
                }
            },
        }
    }

    let Some(seller) = index.seller_mut(&record.seller_id) else {
        return Err(AnalysisError::UnknownSeller {
            seller_id: record.seller_id.to_string(),
            record_index,
        });
    };

    seller
        .record_sale(record.total_amount)
        .ok_or_else(|| AnalysisError::record_overflow(record_index))?;
    for (item, item_revenue, cost) in lines {
        seller
            .record_item(&item.sku, item.quantity, item_revenue, cost)
            .ok_or_else(|| AnalysisError::record_overflow(record_index))?;
        summary.items_applied += 1;
    }

    Ok(())
}

/// Total record-level revenue across all records (unrounded)
///
/// `None` if the sum does not fit in a `Decimal`.
pub fn total_record_revenue(records: &[PurchaseRecord]) -> Option<Decimal> {
    records
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.total_amount))
}
