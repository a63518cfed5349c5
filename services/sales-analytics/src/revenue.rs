//! Item revenue calculation
//!
//! Revenue per line item is a pluggable strategy. The aggregator only ever
//! sees a `&dyn RevenueCalculator`, so callers can swap the formula without
//! touching the pipeline.

use rust_decimal::Decimal;
use types::numeric::percent_to_fraction;
use types::product::Product;
use types::purchase::PurchaseItem;

/// Strategy computing net revenue for one purchase item
///
/// Returns `None` when the result does not fit in a `Decimal`.
pub trait RevenueCalculator {
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Option<Decimal>;
}

/// Closures of the right shape are revenue strategies.
impl<F> RevenueCalculator for F
where
    F: Fn(&PurchaseItem, &Product) -> Option<Decimal>,
{
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

/// Default formula
///
/// `revenue = sale_price × quantity × (1 − discount / 100)`
///
/// Discounts outside [0, 100] are not clamped: a discount above 100 yields
/// negative revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn revenue(&self, item: &PurchaseItem, _product: &Product) -> Option<Decimal> {
        simple_revenue(item)
    }
}

/// Net revenue of an item after its percentage discount
pub fn simple_revenue(item: &PurchaseItem) -> Option<Decimal> {
    let discount_factor = Decimal::ONE.checked_sub(percent_to_fraction(item.discount))?;
    item.sale_price
        .checked_mul(Decimal::from(item.quantity))?
        .checked_mul(discount_factor)
}

/// Cost basis of an item
///
/// `cost = purchase_price × quantity`
pub fn item_cost(item: &PurchaseItem, product: &Product) -> Option<Decimal> {
    product.cost_of(item.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sale_price: u64, quantity: u64, discount: &str) -> PurchaseItem {
        PurchaseItem::new(
            "SKU_001",
            Decimal::from_str_exact(discount).unwrap(),
            Decimal::from(sale_price),
            quantity,
        )
    }

    fn product() -> Product {
        Product::new("SKU_001", Decimal::from(100))
    }

    #[test]
    fn test_simple_revenue_with_discount() {
        // 200 × 3 × 0.9
        let revenue = SimpleRevenue.revenue(&item(200, 3, "10"), &product());
        assert_eq!(revenue, Some(Decimal::from(540)));
    }

    #[test]
    fn test_simple_revenue_no_discount() {
        let revenue = SimpleRevenue.revenue(&item(50, 4, "0"), &product());
        assert_eq!(revenue, Some(Decimal::from(200)));
    }

    #[test]
    fn test_fractional_discount() {
        // 10 × 1 × (1 − 0.125) = 8.75
        let revenue = simple_revenue(&item(10, 1, "12.5"));
        assert_eq!(revenue, Some(Decimal::from_str_exact("8.75").unwrap()));
    }

    #[test]
    fn test_discount_over_hundred_goes_negative() {
        // 100 × 1 × (1 − 1.5) = −50
        let revenue = simple_revenue(&item(100, 1, "150"));
        assert_eq!(revenue, Some(Decimal::from(-50)));
    }

    #[test]
    fn test_revenue_overflow_is_none() {
        let huge = item(10_000_000_000, u64::MAX, "0");
        assert_eq!(simple_revenue(&huge), None);
        assert_eq!(item_cost(&huge, &Product::new("SKU_001", Decimal::from(10_000_000_000u64))), None);
    }

    #[test]
    fn test_item_cost() {
        assert_eq!(item_cost(&item(200, 3, "10"), &product()), Some(Decimal::from(300)));
    }

    #[test]
    fn test_closure_strategy() {
        let flat = |item: &PurchaseItem, _: &Product| {
            item.sale_price.checked_mul(Decimal::from(item.quantity))
        };
        let calc: &dyn RevenueCalculator = &flat;
        assert_eq!(calc.revenue(&item(200, 3, "10"), &product()), Some(Decimal::from(600)));
    }
}
