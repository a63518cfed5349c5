//! The sales snapshot handed to the analytics pipeline
//!
//! `SalesData` is the already-parsed input. Callers holding untyped JSON can
//! go through [`SalesData::from_json_value`], which reports shape problems
//! (missing collection, collection that is not an array) with the same
//! error taxonomy the pipeline uses.

use crate::errors::AnalysisError;
use crate::product::Product;
use crate::purchase::PurchaseRecord;
use crate::seller::Seller;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SELLERS: &str = "sellers";
pub const PRODUCTS: &str = "products";
pub const PURCHASE_RECORDS: &str = "purchase_records";

/// Full input snapshot: sellers, product catalog, and purchase records
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Build a snapshot from an untyped JSON document.
    ///
    /// Each collection must be present and be an array; emptiness is left to
    /// the pipeline's validator. Malformed entries are reported against the
    /// collection they came from.
    pub fn from_json_value(value: Value) -> Result<Self, AnalysisError> {
        let Value::Object(mut root) = value else {
            return Err(AnalysisError::InvalidInput {
                collection: "data".to_string(),
                reason: "is not an object".to_string(),
            });
        };

        Ok(Self {
            sellers: take_collection(&mut root, SELLERS)?,
            products: take_collection(&mut root, PRODUCTS)?,
            purchase_records: take_collection(&mut root, PURCHASE_RECORDS)?,
        })
    }

    /// Parse a JSON string; see [`SalesData::from_json_value`].
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(json).map_err(|e| AnalysisError::InvalidInput {
            collection: "data".to_string(),
            reason: format!("is not valid JSON: {e}"),
        })?;
        Self::from_json_value(value)
    }
}

fn take_collection<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    name: &str,
) -> Result<Vec<T>, AnalysisError> {
    match root.remove(name) {
        None | Some(Value::Null) => Err(AnalysisError::missing_collection(name)),
        Some(value @ Value::Array(_)) => {
            serde_json::from_value(value).map_err(|e| AnalysisError::InvalidInput {
                collection: name.to_string(),
                reason: format!("has a malformed entry: {e}"),
            })
        }
        Some(_) => Err(AnalysisError::not_a_sequence(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Ivanov"}],
            "products": [{"sku": "SKU_001", "purchase_price": 10}],
            "purchase_records": [{
                "seller_id": "seller_1",
                "total_amount": 30,
                "items": [{"sku": "SKU_001", "discount": 0, "sale_price": 15, "quantity": 2}]
            }]
        })
    }

    #[test]
    fn test_from_json_value_ok() {
        let data = SalesData::from_json_value(sample()).unwrap();
        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.products.len(), 1);
        assert_eq!(data.purchase_records[0].items[0].quantity, 2);
    }

    #[test]
    fn test_missing_collection() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("products");
        let err = SalesData::from_json_value(value).unwrap_err();
        assert_eq!(err, AnalysisError::missing_collection("products"));
    }

    #[test]
    fn test_collection_not_a_sequence() {
        let mut value = sample();
        value["purchase_records"] = json!({"seller_id": "seller_1"});
        let err = SalesData::from_json_value(value).unwrap_err();
        assert_eq!(err, AnalysisError::not_a_sequence("purchase_records"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut value = sample();
        value["sellers"] = Value::Null;
        let err = SalesData::from_json_value(value).unwrap_err();
        assert_eq!(err, AnalysisError::missing_collection("sellers"));
    }

    #[test]
    fn test_malformed_entry() {
        let mut value = sample();
        value["products"] = json!([{"sku": "SKU_001"}]);
        let err = SalesData::from_json_value(value).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { ref collection, .. } if collection == "products"));
    }

    #[test]
    fn test_root_not_object() {
        let err = SalesData::from_json_value(json!([1, 2, 3])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = SalesData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_collections_pass_shape_check() {
        let data = SalesData::from_json_str(r#"{"sellers": [], "products": [], "purchase_records": []}"#).unwrap();
        assert!(data.sellers.is_empty());
    }
}
