use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info_span};

use sales_model::{CleanRecord, OrderStatus, YearMonth};

use crate::customer_key;
use crate::summary::SalesMetrics;

/// Revenue of one group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTotal {
    pub key: String,
    pub total: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

/// Grouping queries over a borrowed clean table.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    records: &'a [CleanRecord],
}

impl<'a> MetricsEngine<'a> {
    pub fn new(records: &'a [CleanRecord]) -> Self {
        Self { records }
    }

    pub fn summary(&self) -> SalesMetrics {
        let span = info_span!("metrics", record_count = self.records.len());
        let _guard = span.enter();
        let start = Instant::now();
        let metrics = SalesMetrics::compute(self.records);
        debug!(
            total_orders = metrics.total_orders,
            customer_count = metrics.customer_count,
            duration_ms = start.elapsed().as_millis(),
            "computed summary metrics"
        );
        metrics
    }

    fn completed(&self) -> impl Iterator<Item = &'a CleanRecord> {
        self.records.iter().filter(|record| record.is_completed())
    }

    /// Completed revenue per key, highest first.
    ///
    /// Equal totals keep the order in which their key first appeared.
    /// Records whose key is `None` are skipped.
    fn rank_by<F>(&self, key: F, n: usize) -> Vec<RankedTotal>
    where
        F: Fn(&'a CleanRecord) -> Option<&'a str>,
    {
        let mut position: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<RankedTotal> = Vec::new();
        for record in self.completed() {
            let Some(name) = key(record) else {
                continue;
            };
            let idx = *position.entry(name).or_insert_with(|| {
                totals.push(RankedTotal {
                    key: name.to_string(),
                    total: 0.0,
                    orders: 0,
                });
                totals.len() - 1
            });
            totals[idx].total += record.order_amount;
            totals[idx].orders += 1;
        }
        // `sort_by` is stable, so first-encounter order survives ties.
        totals.sort_by(|a, b| b.total.total_cmp(&a.total));
        totals.truncate(n);
        totals
    }

    /// Top `n` categories by completed revenue. `usize::MAX` returns all.
    pub fn top_categories(&self, n: usize) -> Vec<RankedTotal> {
        self.rank_by(|record| Some(record.product_category.as_str()), n)
    }

    /// Top `n` customers by completed revenue, ignoring orders with no
    /// customer id. `usize::MAX` returns all.
    pub fn top_customers(&self, n: usize) -> Vec<RankedTotal> {
        self.rank_by(customer_key, n)
    }

    /// Completed revenue per calendar month, earliest first. Orders with no
    /// valid date are left out.
    pub fn monthly_trend(&self) -> Vec<MonthlyTotal> {
        let mut months: BTreeMap<YearMonth, (f64, usize)> = BTreeMap::new();
        for record in self.completed() {
            let Some(month) = record.order_month() else {
                continue;
            };
            let entry = months.entry(month).or_insert((0.0, 0));
            entry.0 += record.order_amount;
            entry.1 += 1;
        }
        months
            .into_iter()
            .map(|(month, (total, orders))| MonthlyTotal {
                month,
                total,
                orders,
            })
            .collect()
    }

    /// Record count per status over the whole table, in [`OrderStatus::ALL`] order.
    pub fn status_breakdown(&self) -> Vec<StatusCount> {
        OrderStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: self
                    .records
                    .iter()
                    .filter(|record| record.status == *status)
                    .count(),
            })
            .collect()
    }
}
