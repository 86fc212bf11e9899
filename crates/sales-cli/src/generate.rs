//! Synthetic sales data for demos and tests.
//!
//! Output is deterministic for a given seed. About one order in twenty has
//! no status so the cleaning fill step has work to do.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use sales_model::{ORDER_COLUMNS, OrderStatus, RawRecord, format_numeric};

const CATALOG: [(&str, [&str; 4]); 5] = [
    ("Electronics", ["Laptop", "Phone", "Tablet", "Headphones"]),
    ("Clothing", ["T-Shirt", "Jeans", "Jacket", "Shoes"]),
    ("Home & Garden", ["Lamp", "Plant", "Cushion", "Rug"]),
    ("Sports", ["Yoga Mat", "Dumbbell", "Running Shoes", "Bike"]),
    ("Books", ["Fiction", "Science", "History", "Art"]),
];

/// Status draw weights; `None` leaves the cell empty.
const STATUS_WEIGHTS: [(Option<OrderStatus>, f64); 4] = [
    (Some(OrderStatus::Completed), 0.70),
    (Some(OrderStatus::Pending), 0.15),
    (Some(OrderStatus::Cancelled), 0.10),
    (None, 0.05),
];

const FIRST_ORDER_ID: usize = 1000;
const YEAR: i32 = 2023;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub orders: usize,
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            orders: 200,
            seed: 42,
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn generate_orders(options: &GenerateOptions) -> Result<Vec<RawRecord>> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let status_index = WeightedIndex::new(STATUS_WEIGHTS.iter().map(|(_, weight)| *weight))
        .context("build status weights")?;

    let mut records = Vec::with_capacity(options.orders);
    for offset in 0..options.orders {
        let (category, products) = CATALOG[rng.gen_range(0..CATALOG.len())];
        let product = products[rng.gen_range(0..products.len())];
        let quantity: u32 = rng.gen_range(1..5);
        let unit_price: f64 = rng.gen_range(10.0..500.0);
        let amount = f64::from(quantity) * unit_price;
        let status = STATUS_WEIGHTS[status_index.sample(&mut rng)].0;
        let customer: u32 = rng.gen_range(1..50);
        let day_of_year: u32 = rng.gen_range(1..=365);

        records.push(RawRecord {
            order_id: Some(format!("ORD{}", FIRST_ORDER_ID + offset)),
            customer_id: Some(format!("CUST{customer}")),
            order_date: NaiveDate::from_yo_opt(YEAR, day_of_year)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            product_category: Some(category.to_string()),
            product_name: Some(product.to_string()),
            quantity: Some(quantity.to_string()),
            unit_price: Some(format_numeric(round_cents(unit_price))),
            order_amount: Some(format_numeric(round_cents(amount))),
            status: status.map(|status| status.as_str().to_string()),
        });
    }
    Ok(records)
}

/// Write raw records with the source header; `None` cells stay empty.
pub fn write_raw_csv(path: &Path, records: &[RawRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(ORDER_COLUMNS)?;
    for record in records {
        let cells = [
            &record.order_id,
            &record.customer_id,
            &record.order_date,
            &record.product_category,
            &record.product_name,
            &record.quantity,
            &record.unit_price,
            &record.order_amount,
            &record.status,
        ];
        writer.write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or_default()))?;
    }
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), record_count = records.len(), "wrote sample data");
    Ok(())
}
