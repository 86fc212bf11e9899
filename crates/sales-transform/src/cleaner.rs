//! Raw-to-clean record transformation.
//!
//! Steps run in a fixed order over the whole batch:
//! 1. Fill missing `status` with `pending`
//! 2. Coerce `order_date` to a date
//! 3. Coerce `order_amount`, `unit_price` and `quantity` to numbers
//! 4. Drop records whose amount or quantity is missing or not positive
//! 5. Drop duplicate `order_id`s, keeping the first occurrence
//!
//! A cell that fails coercion becomes `None` and is counted in the
//! [`CoercionSummary`]; it never aborts the batch.

use std::fmt;
use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use sales_model::{CleanRecord, OrderStatus, RawRecord};

use crate::dedupe::dedupe_by_key;
use crate::normalization::{
    StatusOutcome, normalize_status, parse_amount, parse_f64, parse_order_date,
};

/// Field whose cell failed coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionField {
    OrderDate,
    Quantity,
    UnitPrice,
    OrderAmount,
    Status,
}

impl CoercionField {
    pub const ALL: [CoercionField; 5] = [
        CoercionField::OrderDate,
        CoercionField::Quantity,
        CoercionField::UnitPrice,
        CoercionField::OrderAmount,
        CoercionField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoercionField::OrderDate => "order_date",
            CoercionField::Quantity => "quantity",
            CoercionField::UnitPrice => "unit_price",
            CoercionField::OrderAmount => "order_amount",
            CoercionField::Status => "status",
        }
    }
}

impl fmt::Display for CoercionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field count of cells that could not be coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoercionSummary {
    pub order_date: usize,
    pub quantity: usize,
    pub unit_price: usize,
    pub order_amount: usize,
    pub status: usize,
}

impl CoercionSummary {
    fn record(&mut self, field: CoercionField) {
        *self.slot(field) += 1;
    }

    fn slot(&mut self, field: CoercionField) -> &mut usize {
        match field {
            CoercionField::OrderDate => &mut self.order_date,
            CoercionField::Quantity => &mut self.quantity,
            CoercionField::UnitPrice => &mut self.unit_price,
            CoercionField::OrderAmount => &mut self.order_amount,
            CoercionField::Status => &mut self.status,
        }
    }

    pub fn count(&self, field: CoercionField) -> usize {
        match field {
            CoercionField::OrderDate => self.order_date,
            CoercionField::Quantity => self.quantity,
            CoercionField::UnitPrice => self.unit_price,
            CoercionField::OrderAmount => self.order_amount,
            CoercionField::Status => self.status,
        }
    }

    pub fn total(&self) -> usize {
        CoercionField::ALL
            .iter()
            .map(|field| self.count(*field))
            .sum()
    }
}

/// Audit counts for one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub status_filled: usize,
    pub invalid_removed: usize,
    pub duplicates_removed: usize,
    pub warnings: CoercionSummary,
}

impl CleaningReport {
    pub fn output_rows(&self) -> usize {
        self.input_rows - self.invalid_removed - self.duplicates_removed
    }

    pub fn removed(&self) -> usize {
        self.invalid_removed + self.duplicates_removed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub records: Vec<CleanRecord>,
    pub report: CleaningReport,
}

/// A record after fill and coercion, before filtering.
struct CoercedRecord {
    order_id: String,
    customer_id: String,
    order_date: Option<NaiveDate>,
    product_category: String,
    product_name: String,
    quantity: Option<f64>,
    unit_price: Option<f64>,
    order_amount: Option<f64>,
    status: OrderStatus,
}

impl CoercedRecord {
    fn into_clean(self) -> Option<CleanRecord> {
        let quantity = self.quantity.filter(|value| *value > 0.0)?;
        let order_amount = self.order_amount.filter(|value| *value > 0.0)?;
        Some(CleanRecord {
            order_id: self.order_id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            product_category: self.product_category,
            product_name: self.product_name,
            quantity,
            unit_price: self.unit_price,
            order_amount,
            status: self.status,
        })
    }
}

fn text(value: Option<&String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Coerce a present cell; a failed parse is counted and logged.
fn coerce<T>(
    value: Option<&String>,
    field: CoercionField,
    order_id: &str,
    parse: impl Fn(&str) -> Option<T>,
    warnings: &mut CoercionSummary,
) -> Option<T> {
    let raw = value.map(|v| v.trim()).filter(|v| !v.is_empty())?;
    let parsed = parse(raw);
    if parsed.is_none() {
        warnings.record(field);
        debug!(
            order_id = %order_id,
            field = field.as_str(),
            value = %raw,
            "coercion failed; treating as null"
        );
    }
    parsed
}

fn coerce_record(
    raw: &RawRecord,
    report: &mut CleaningReport,
) -> CoercedRecord {
    let order_id = text(raw.order_id.as_ref());
    let warnings = &mut report.warnings;

    let outcome = normalize_status(raw.status.as_deref());
    match outcome {
        StatusOutcome::Filled => report.status_filled += 1,
        StatusOutcome::Unrecognized => {
            warnings.record(CoercionField::Status);
            debug!(
                order_id = %order_id,
                field = CoercionField::Status.as_str(),
                value = raw.status.as_deref().unwrap_or_default(),
                "unrecognized status; using pending"
            );
        }
        StatusOutcome::Parsed(_) => {}
    }
    let status = outcome.status();

    let order_date = coerce(
        raw.order_date.as_ref(),
        CoercionField::OrderDate,
        &order_id,
        parse_order_date,
        warnings,
    );
    let order_amount = coerce(
        raw.order_amount.as_ref(),
        CoercionField::OrderAmount,
        &order_id,
        parse_amount,
        warnings,
    );
    let unit_price = coerce(
        raw.unit_price.as_ref(),
        CoercionField::UnitPrice,
        &order_id,
        parse_amount,
        warnings,
    );
    let quantity = coerce(
        raw.quantity.as_ref(),
        CoercionField::Quantity,
        &order_id,
        parse_f64,
        warnings,
    );

    CoercedRecord {
        customer_id: text(raw.customer_id.as_ref()),
        product_category: text(raw.product_category.as_ref()),
        product_name: text(raw.product_name.as_ref()),
        order_id,
        order_date,
        quantity,
        unit_price,
        order_amount,
        status,
    }
}

/// Clean a batch of raw records.
pub fn clean_records(raw: &[RawRecord]) -> CleanOutcome {
    let span = info_span!("clean", input_rows = raw.len());
    let _guard = span.enter();
    let start = Instant::now();
    let mut report = CleaningReport {
        input_rows: raw.len(),
        ..CleaningReport::default()
    };

    // Steps 1-3: fill and coerce.
    let coerced: Vec<CoercedRecord> = raw
        .iter()
        .map(|record| coerce_record(record, &mut report))
        .collect();
    debug!(status_filled = report.status_filled, "filled missing status");
    for field in CoercionField::ALL {
        let count = report.warnings.count(field);
        if count > 0 {
            warn!(field = field.as_str(), count, "cells could not be coerced");
        }
    }

    // Step 4: drop non-positive or missing amount/quantity.
    let valid: Vec<CleanRecord> = coerced
        .into_iter()
        .filter_map(CoercedRecord::into_clean)
        .collect();
    report.invalid_removed = raw.len() - valid.len();
    info!(removed = report.invalid_removed, "removed invalid entries");

    // Step 5: drop duplicate order ids.
    let (records, duplicates_removed) = dedupe_by_key(valid, |record| record.order_id.as_str());
    report.duplicates_removed = duplicates_removed;
    info!(removed = duplicates_removed, "removed duplicate orders");

    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    CleanOutcome { records, report }
}
