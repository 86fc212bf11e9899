//! Validated business entities built from order data.
//!
//! Every constructor checks its inputs before returning, so an entity value
//! is never observed in an invalid state.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::record::CleanRecord;
use crate::status::OrderStatus;

fn validate_id(id: String) -> Result<String> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(id)
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub base_price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: f64,
    ) -> Result<Self> {
        let id = validate_id(id.into())?;
        let name = validate_name(name.into())?;
        if base_price.is_nan() || base_price < 0.0 {
            return Err(ValidationError::NegativePrice { price: base_price });
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            base_price,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {} - ${:.2} ({})",
            self.name, self.base_price, self.category
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub lifetime_value: f64,
    pub orders: Vec<Order>,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let id = validate_id(id.into())?;
        let name = validate_name(name.into())?;
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail { email });
        }
        Ok(Self {
            id,
            name,
            email,
            lifetime_value: 0.0,
            orders: Vec::new(),
        })
    }

    pub fn update_lifetime_value(&mut self, amount: f64) -> Result<()> {
        if amount.is_nan() || amount < 0.0 {
            return Err(ValidationError::NegativeAmount { amount });
        }
        self.lifetime_value += amount;
        Ok(())
    }

    /// Attach an order; completed orders also raise the lifetime value.
    pub fn add_order(&mut self, order: Order) -> Result<()> {
        if order.status == OrderStatus::Completed {
            self.update_lifetime_value(order.amount)?;
        }
        self.orders.push(order);
        Ok(())
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} (LTV: ${:.2})",
            self.name, self.lifetime_value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: String,
    pub date: Option<NaiveDate>,
    pub customer_id: String,
    pub items: Vec<String>,
    pub amount: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Build an order, rejecting an empty id or a status outside
    /// pending/completed/cancelled.
    pub fn new(
        order_id: impl Into<String>,
        date: Option<NaiveDate>,
        customer_id: impl Into<String>,
        items: Vec<String>,
        amount: f64,
        status: &str,
    ) -> Result<Self> {
        let order_id = validate_id(order_id.into())?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|_| ValidationError::InvalidStatus {
                status: status.to_string(),
            })?;
        Ok(Self {
            order_id,
            date,
            customer_id: customer_id.into(),
            items,
            amount,
            status,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {}: ${:.2} ({})",
            self.order_id, self.amount, self.status
        )
    }
}

/// Builds entities from clean order records.
pub struct EntityFactory;

impl EntityFactory {
    /// Products are keyed by name; a record without a unit price yields a
    /// zero base price.
    pub fn product_from_record(record: &CleanRecord) -> Result<Product> {
        Product::new(
            record.product_name.clone(),
            record.product_name.clone(),
            record.product_category.clone(),
            record.unit_price.unwrap_or(0.0),
        )
    }

    pub fn customer_from_record(record: &CleanRecord) -> Result<Customer> {
        let id = &record.customer_id;
        Customer::new(
            id.clone(),
            format!("Customer_{id}"),
            format!("customer_{id}@example.com"),
        )
    }

    pub fn order_from_record(record: &CleanRecord) -> Result<Order> {
        Order::new(
            record.order_id.clone(),
            record.order_date,
            record.customer_id.clone(),
            vec![record.product_name.clone()],
            record.order_amount,
            record.status.as_str(),
        )
    }
}
