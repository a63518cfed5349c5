//! Sales Analytics Service
//!
//! Computes per-seller performance from a sales snapshot and returns a
//! ranked report with revenue, profit, top products, and tiered bonuses.
//!
//! # Architecture
//!
//! ```text
//!   SalesData + AnalysisOptions
//!        │
//!   ┌────▼─────┐
//!   │Validator │  ← rejects empty collections / missing strategies
//!   └────┬─────┘
//!   ┌────▼─────┐
//!   │  Index   │  ← seller-id → stats, sku → product
//!   └────┬─────┘
//!   ┌────▼──────┐     ┌─────────┐
//!   │Aggregator │ ◄── │ Revenue │
//!   └────┬──────┘     └─────────┘
//!   ┌────▼─────┐      ┌─────────┐
//!   │ Ranking  │ ◄─── │  Bonus  │
//!   └────┬─────┘      └─────────┘
//!   ┌────▼──────┐
//!   │Finalizer  │  ← rounding, top products
//!   └────┬──────┘
//!        ▼
//!      Report
//! ```
//!
//! The whole run is single-threaded and holds no state between calls.

pub mod config;
pub mod stats;
pub mod validator;
pub mod index;
pub mod revenue;
pub mod aggregator;
pub mod ranking;
pub mod finalizer;
pub mod events;
pub mod engine;

pub use config::{AnalysisOptions, AnalyzerConfig, UnknownReferencePolicy};
pub use engine::{analyze, SalesAnalyzer};
pub use ranking::{BonusCalculator, ProfitTierBonus};
pub use revenue::{RevenueCalculator, SimpleRevenue};
