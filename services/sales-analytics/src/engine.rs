//! Sales analyzer orchestrator
//!
//! Ties together validation, indexing, aggregation, ranking, bonus
//! assignment, and finalization into the single `analyze` entry point.

use tracing::{debug, info};
use types::data::SalesData;
use types::errors::AnalysisError;
use types::report::Report;

use crate::aggregator;
use crate::config::{AnalysisOptions, AnalyzerConfig};
use crate::events::AnalysisEvent;
use crate::finalizer;
use crate::index::SalesIndex;
use crate::ranking;
use crate::validator;

/// Seller performance analyzer
///
/// Holds configuration only; every call to `analyze` is independent.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    config: AnalyzerConfig,
}

impl SalesAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Produce the ranked report for a sales snapshot.
    pub fn analyze(&self, data: &SalesData, options: &AnalysisOptions) -> Result<Report, AnalysisError> {
        self.analyze_with_events(data, options).map(|(report, _)| report)
    }

    /// Produce the ranked report plus the diagnostic events of the run.
    pub fn analyze_with_events(
        &self,
        data: &SalesData,
        options: &AnalysisOptions,
    ) -> Result<(Report, Vec<AnalysisEvent>), AnalysisError> {
        validator::validate_data(data)?;
        let strategies = validator::resolve_strategies(options)?;

        info!(
            sellers = data.sellers.len(),
            products = data.products.len(),
            purchase_records = data.purchase_records.len(),
            "Starting sales analysis"
        );

        let mut events = Vec::new();
        let mut index = SalesIndex::build(data, &mut events);
        debug!(
            sellers = index.seller_count(),
            products = index.product_count(),
            "Indexes built"
        );

        let summary = aggregator::aggregate(
            &mut index,
            &data.purchase_records,
            strategies.revenue,
            self.config.unknown_references,
            &mut events,
        )?;

        let mut ranked = index.into_stats();
        ranking::rank_by_profit(&mut ranked);
        ranking::assign_bonuses(&mut ranked, strategies.bonus)?;

        let report = finalizer::finalize(
            ranked,
            self.config.top_products_limit,
            self.config.rounding,
        );

        info!(
            sellers = report.len(),
            records_applied = summary.records_applied,
            records_skipped = summary.records_skipped,
            items_skipped = summary.items_skipped,
            events = events.len(),
            record_revenue = ?aggregator::total_record_revenue(&data.purchase_records),
            top_seller = report.first().map(|r| r.seller_id.as_str()).unwrap_or("-"),
            "Sales analysis complete"
        );

        for event in &events {
            debug!(kind = event.label(), detail = ?event, "Analysis event");
        }

        Ok((report, events))
    }
}

/// Analyze with default configuration.
pub fn analyze(data: &SalesData, options: &AnalysisOptions) -> Result<Report, AnalysisError> {
    SalesAnalyzer::new().analyze(data, options)
}
