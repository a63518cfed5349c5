//! Property-based tests for the sales analytics pipeline
//!
//! Randomized snapshots check the invariants that hold for every valid
//! input: conservation of record counts, idempotence, profit ordering,
//! item-order commutativity, and the top products cap.

use proptest::prelude::*;
use rust_decimal::Decimal;
use sales_analytics::{analyze, AnalysisOptions};
use types::data::SalesData;
use types::product::Product;
use types::purchase::{PurchaseItem, PurchaseRecord};
use types::seller::Seller;

const SKU_COUNT: usize = 15;

/// Cents → Decimal with two decimal places
fn money(cents: u32) -> Decimal {
    Decimal::new(cents as i64, 2)
}

fn arb_item() -> impl Strategy<Value = PurchaseItem> {
    (0..SKU_COUNT, 0u32..=100, 1u32..100_000, 1u64..20).prop_map(|(sku, discount, price, qty)| {
        PurchaseItem::new(
            format!("SKU_{sku:02}"),
            Decimal::from(discount),
            money(price),
            qty,
        )
    })
}

fn arb_record(seller_count: usize) -> impl Strategy<Value = PurchaseRecord> {
    (
        0..seller_count,
        0u32..1_000_000,
        prop::collection::vec(arb_item(), 1..6),
    )
        .prop_map(|(seller, total, items)| {
            PurchaseRecord::new(format!("seller_{seller}"), money(total), items)
        })
}

fn arb_data() -> impl Strategy<Value = SalesData> {
    (1usize..8)
        .prop_flat_map(|seller_count| {
            (
                Just(seller_count),
                prop::collection::vec(1u32..50_000, SKU_COUNT),
                prop::collection::vec(arb_record(seller_count), 1..40),
            )
        })
        .prop_map(|(seller_count, costs, records)| {
            let sellers = (0..seller_count)
                .map(|i| Seller::new(format!("seller_{i}"), "Seller", format!("No{i}")))
                .collect();
            let products = costs
                .into_iter()
                .enumerate()
                .map(|(i, cost)| Product::new(format!("SKU_{i:02}"), money(cost)))
                .collect();
            SalesData::new(sellers, products, records)
        })
}

proptest! {
    #[test]
    fn prop_sales_count_conserved(data in arb_data()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        let counted: u64 = report.iter().map(|r| r.sales_count).sum();
        prop_assert_eq!(counted, data.purchase_records.len() as u64);
        prop_assert_eq!(report.len(), data.sellers.len());
    }

    #[test]
    fn prop_analyze_is_idempotent(data in arb_data()) {
        let first = analyze(&data, &AnalysisOptions::standard()).unwrap();
        let second = analyze(&data, &AnalysisOptions::standard()).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sorted_by_profit_descending(data in arb_data()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        for pair in report.windows(2) {
            prop_assert!(pair[0].profit >= pair[1].profit);
        }
    }

    #[test]
    fn prop_item_order_does_not_change_totals(data in arb_data(), rotate in 0usize..6) {
        let mut permuted = data.clone();
        for record in &mut permuted.purchase_records {
            let len = record.items.len();
            record.items.rotate_left(rotate % len);
            if rotate % 2 == 1 {
                record.items.reverse();
            }
        }

        let original = analyze(&data, &AnalysisOptions::standard()).unwrap();
        let shuffled = analyze(&permuted, &AnalysisOptions::standard()).unwrap();

        for seller in &original {
            let other = shuffled.iter().find(|r| r.seller_id == seller.seller_id).unwrap();
            prop_assert_eq!(seller.profit, other.profit);
            prop_assert_eq!(seller.revenue, other.revenue);
            prop_assert_eq!(seller.item_revenue, other.item_revenue);
        }
    }

    #[test]
    fn prop_top_products_bounded(data in arb_data()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        for seller in &report {
            prop_assert!(seller.top_products.len() <= 10);
            prop_assert!(seller
                .top_products
                .windows(2)
                .all(|w| w[0].quantity >= w[1].quantity));
        }
    }

    #[test]
    fn prop_revenue_is_sum_of_record_totals(data in arb_data()) {
        let report = analyze(&data, &AnalysisOptions::standard()).unwrap();
        for seller in &report {
            let expected: Decimal = data
                .purchase_records
                .iter()
                .filter(|r| r.seller_id == seller.seller_id)
                .map(|r| r.total_amount)
                .sum();
            prop_assert_eq!(seller.revenue, expected.round_dp(2));
        }
    }
}
