//! Normalization functions for raw order cells.
//!
//! - **datetime**: order date parsing
//! - **numeric**: quantity and currency amount parsing
//! - **status**: order status fill and validation

pub mod datetime;
pub mod numeric;
pub mod status;

pub use datetime::parse_order_date;
pub use numeric::{parse_amount, parse_f64};
pub use status::{StatusOutcome, normalize_status};
