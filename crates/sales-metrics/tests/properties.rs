//! Property tests for metric invariants.

use proptest::prelude::*;

use sales_metrics::{MetricsEngine, SalesMetrics};
use sales_model::{CleanRecord, OrderStatus};

fn clean_record() -> impl Strategy<Value = CleanRecord> {
    (
        0u32..500,
        prop::sample::select(vec!["CUST1", "CUST2", "CUST3", ""]),
        prop::sample::select(vec!["Books", "Sports", "Clothing"]),
        1u32..100_000,
        prop::sample::select(OrderStatus::ALL.to_vec()),
    )
        .prop_map(|(id, customer, category, cents, status)| CleanRecord {
            order_id: format!("ORD{id}"),
            customer_id: customer.to_string(),
            order_date: None,
            product_category: category.to_string(),
            product_name: "Item".to_string(),
            quantity: 1.0,
            unit_price: None,
            order_amount: f64::from(cents) / 100.0,
            status,
        })
}

proptest! {
    #[test]
    fn revenue_matches_category_totals(records in prop::collection::vec(clean_record(), 0..60)) {
        let metrics = SalesMetrics::compute(&records);
        let engine = MetricsEngine::new(&records);
        let by_category: f64 = engine.top_categories(usize::MAX).iter().map(|t| t.total).sum();
        prop_assert!((metrics.total_revenue - by_category).abs() < 1e-6);
    }

    #[test]
    fn rates_stay_within_bounds(records in prop::collection::vec(clean_record(), 0..60)) {
        let metrics = SalesMetrics::compute(&records);
        prop_assert!((0.0..=100.0).contains(&metrics.repeat_customer_rate));
        prop_assert!((0.0..=100.0).contains(&metrics.cancellation_rate));
    }

    #[test]
    fn rankings_are_descending(records in prop::collection::vec(clean_record(), 0..60)) {
        let engine = MetricsEngine::new(&records);
        let top = engine.top_customers(usize::MAX);
        for pair in top.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn customer_figures_ignore_blank_ids(records in prop::collection::vec(clean_record(), 0..60)) {
        let metrics = SalesMetrics::compute(&records);
        let engine = MetricsEngine::new(&records);
        prop_assert!(metrics.customer_count <= 3);
        prop_assert!(engine.top_customers(usize::MAX).iter().all(|t| !t.key.is_empty()));
    }
}
