use std::collections::BTreeMap;

use serde::Serialize;

use sales_model::CleanRecord;

use crate::{customer_key, ratio};

/// The scalar metrics of one clean table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SalesMetrics {
    /// Sum of `order_amount` over completed orders.
    pub total_revenue: f64,
    /// Number of completed orders.
    pub total_orders: usize,
    /// Distinct non-blank customer ids over all clean records.
    pub customer_count: usize,
    pub avg_order_value: f64,
    /// Percent of customers with more than one order, in `[0, 100]`.
    pub repeat_customer_rate: f64,
    /// Percent of clean records that were cancelled, in `[0, 100]`.
    pub cancellation_rate: f64,
}

impl SalesMetrics {
    pub fn compute(records: &[CleanRecord]) -> Self {
        let (total_revenue, total_orders) = records
            .iter()
            .filter(|record| record.is_completed())
            .fold((0.0, 0usize), |(sum, count), record| {
                (sum + record.order_amount, count + 1)
            });

        let mut orders_per_customer: BTreeMap<&str, usize> = BTreeMap::new();
        for customer in records.iter().filter_map(customer_key) {
            *orders_per_customer.entry(customer).or_default() += 1;
        }
        let customer_count = orders_per_customer.len();
        let repeat_customers = orders_per_customer
            .values()
            .filter(|count| **count > 1)
            .count();
        let cancelled = records.iter().filter(|record| record.is_cancelled()).count();

        Self {
            total_revenue,
            total_orders,
            customer_count,
            avg_order_value: ratio(total_revenue, total_orders as f64),
            repeat_customer_rate: ratio(repeat_customers as f64, customer_count as f64) * 100.0,
            cancellation_rate: ratio(cancelled as f64, records.len() as f64) * 100.0,
        }
    }
}
