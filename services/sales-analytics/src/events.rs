//! Analysis event definitions
//!
//! Non-fatal observations made while a run progresses, in input order.
//! They never change the outcome of a fail-fast run; under the skip policy
//! they are the record of what was left out of the totals.

use serde::{Deserialize, Serialize};
use types::ids::{SellerId, Sku};

/// Diagnostic event emitted during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisEvent {
    /// A seller id appeared more than once; the last occurrence is indexed
    DuplicateSeller { seller_id: SellerId },
    /// A SKU appeared more than once; the last occurrence is indexed
    DuplicateProduct { sku: Sku },
    /// A purchase record named an unknown seller and was dropped
    RecordSkipped { record_index: usize, seller_id: SellerId },
    /// A purchase item named an unknown SKU and was dropped
    ItemSkipped { record_index: usize, sku: Sku },
}

impl AnalysisEvent {
    /// Short label for log lines
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisEvent::DuplicateSeller { .. } => "duplicate_seller",
            AnalysisEvent::DuplicateProduct { .. } => "duplicate_product",
            AnalysisEvent::RecordSkipped { .. } => "record_skipped",
            AnalysisEvent::ItemSkipped { .. } => "item_skipped",
        }
    }

    /// True if the event means input data was left out of the totals
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            AnalysisEvent::RecordSkipped { .. } | AnalysisEvent::ItemSkipped { .. }
        )
    }
}
