//! Seller input records

use crate::ids::SellerId;
use serde::{Deserialize, Serialize};

/// A seller as supplied by the data source
///
/// Extra source fields (hire date, position, ...) are ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: SellerId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name: first and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
