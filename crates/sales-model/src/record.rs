//! Raw and clean order records.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};

use crate::status::OrderStatus;

/// One row as read from the source file.
///
/// Every field is kept as text. An empty cell is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub order_date: Option<String>,
    pub product_category: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub order_amount: Option<String>,
    pub status: Option<String>,
}

/// A validated order.
///
/// Within a clean table `order_id` is unique and both `quantity` and
/// `order_amount` are strictly positive. `order_date` and `unit_price` are
/// `None` when the source value could not be coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: Option<NaiveDate>,
    pub product_category: String,
    pub product_name: String,
    pub quantity: f64,
    pub unit_price: Option<f64>,
    pub order_amount: f64,
    pub status: OrderStatus,
}

impl CleanRecord {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    /// Calendar month of the order date, if the date is known.
    pub fn order_month(&self) -> Option<YearMonth> {
        self.order_date.map(YearMonth::from_date)
    }

    /// Render the record back into source text form.
    ///
    /// Unknown dates and prices become empty cells, numbers drop trailing zeros.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            order_id: Some(self.order_id.clone()),
            customer_id: Some(self.customer_id.clone()),
            order_date: self
                .order_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            product_category: Some(self.product_category.clone()),
            product_name: Some(self.product_name.clone()),
            quantity: Some(format_numeric(self.quantity)),
            unit_price: self.unit_price.map(format_numeric),
            order_amount: Some(format_numeric(self.order_amount)),
            status: Some(self.status.as_str().to_string()),
        }
    }
}

/// Year and month key used to bucket orders by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
