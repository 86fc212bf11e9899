//! Aggregate statistics over a clean order table.
//!
//! Revenue figures only count completed orders. Customer and cancellation
//! figures use every clean record. Records without a customer id are left
//! out of customer figures. Any ratio with a zero denominator is 0.

mod engine;
mod summary;

pub use engine::{MetricsEngine, MonthlyTotal, RankedTotal, StatusCount};
pub use summary::SalesMetrics;

use sales_model::CleanRecord;

/// The record's customer id, or `None` when it is blank.
pub(crate) fn customer_key(record: &CleanRecord) -> Option<&str> {
    let id = record.customer_id.as_str();
    (!id.trim().is_empty()).then_some(id)
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
