//! Product catalog records
//!
//! Read-only reference data. `purchase_price` is the cost basis used for
//! profit computation.

use crate::ids::Sku;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product keyed by SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub purchase_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
}

impl Product {
    /// Create a product with only the fields the pipeline needs
    pub fn new(sku: impl Into<String>, purchase_price: Decimal) -> Self {
        Self {
            sku: Sku::new(sku),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    /// Cost of `quantity` units at the purchase price
    ///
    /// `None` if the product does not fit in a `Decimal`.
    pub fn cost_of(&self, quantity: u64) -> Option<Decimal> {
        self.purchase_price.checked_mul(Decimal::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_of() {
        let product = Product::new("SKU_001", Decimal::from_str_exact("12.5").unwrap());
        assert_eq!(product.cost_of(4), Some(Decimal::from(50)));
        assert_eq!(product.cost_of(0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_cost_of_overflow() {
        let product = Product::new("SKU_001", Decimal::from(10_000_000_000u64));
        assert_eq!(product.cost_of(u64::MAX), None);
    }

    #[test]
    fn test_deserialize_from_numbers() {
        let json = r#"{"sku": "SKU_001", "purchase_price": 10.25, "name": "Tea", "category": "Food"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.purchase_price, Decimal::from_str_exact("10.25").unwrap());
        assert_eq!(product.name.as_deref(), Some("Tea"));
        assert!(product.sale_price.is_none());
    }
}
