//! Types library for seller performance analytics
//!
//! This library provides the data model shared by the analytics pipeline and
//! its callers: the raw sales snapshot going in, the ranked report coming out,
//! and the error taxonomy in between.
//!
//! # Modules
//! - `ids`: Identifiers (SellerId, Sku)
//! - `numeric`: Money rounding and percentage helpers
//! - `seller`: Seller input records
//! - `product`: Product catalog records
//! - `purchase`: Purchase records and line items
//! - `data`: The full sales snapshot and its shape checks
//! - `report`: Finalized per-seller report records
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod seller;
pub mod product;
pub mod purchase;
pub mod data;
pub mod report;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::seller::*;
    pub use crate::product::*;
    pub use crate::purchase::*;
    pub use crate::data::*;
    pub use crate::report::*;
    pub use crate::errors::*;
}
