//! Error types for sales analytics
//!
//! Comprehensive error taxonomy using thiserror. Every failure is a
//! synchronous failure of the analysis entry point; no partial report is
//! produced alongside an error.

use thiserror::Error;

/// Top-level analysis error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A required input collection is missing, not a sequence, or empty
    #[error("Invalid input: {collection} {reason}")]
    InvalidInput { collection: String, reason: String },

    /// The options object lacks a required capability
    #[error("Invalid options: missing {missing}")]
    InvalidOptions { missing: String },

    /// A purchase record references a seller absent from the seller index
    #[error("Unknown seller {seller_id} in purchase record #{record_index}")]
    UnknownSeller { seller_id: String, record_index: usize },

    /// A purchase item references a SKU absent from the product index
    #[error("Unknown product {sku} in purchase record #{record_index}")]
    UnknownProduct { sku: String, record_index: usize },

    /// Money or quantity arithmetic left the representable range
    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    /// A configuration document could not be parsed
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl AnalysisError {
    pub fn missing_collection(collection: &str) -> Self {
        Self::InvalidInput {
            collection: collection.to_string(),
            reason: "is missing".to_string(),
        }
    }

    pub fn not_a_sequence(collection: &str) -> Self {
        Self::InvalidInput {
            collection: collection.to_string(),
            reason: "is not a sequence".to_string(),
        }
    }

    pub fn empty_collection(collection: &str) -> Self {
        Self::InvalidInput {
            collection: collection.to_string(),
            reason: "is empty".to_string(),
        }
    }

    pub fn record_overflow(record_index: usize) -> Self {
        Self::Overflow {
            context: format!("purchase record #{record_index}"),
        }
    }

    pub fn bonus_overflow(rank: usize) -> Self {
        Self::Overflow {
            context: format!("bonus for rank {rank}"),
        }
    }

    /// True for the input/options validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidOptions { .. })
    }
}
