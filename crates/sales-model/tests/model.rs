//! Tests for sales-model entity construction.

use chrono::NaiveDate;
use sales_model::{
    CleanRecord, Customer, EntityFactory, Order, OrderStatus, Product, ValidationError,
};

fn record(customer_id: &str, unit_price: Option<f64>) -> CleanRecord {
    CleanRecord {
        order_id: "ORD1001".to_string(),
        customer_id: customer_id.to_string(),
        order_date: NaiveDate::from_ymd_opt(2023, 5, 17),
        product_category: "Electronics".to_string(),
        product_name: "Laptop".to_string(),
        quantity: 2.0,
        unit_price,
        order_amount: 640.5,
        status: OrderStatus::Completed,
    }
}

#[test]
fn product_rejects_empty_identifier_and_name() {
    assert_eq!(
        Product::new("", "Lamp", "Home & Garden", 10.0),
        Err(ValidationError::EmptyId)
    );
    assert_eq!(
        Product::new("lamp", "  ", "Home & Garden", 10.0),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn product_rejects_negative_price() {
    let err = Product::new("lamp", "Lamp", "Home & Garden", -0.01).unwrap_err();
    assert!(matches!(err, ValidationError::NegativePrice { .. }));
    assert!(Product::new("lamp", "Lamp", "Home & Garden", f64::NAN).is_err());
    assert!(Product::new("lamp", "Lamp", "Home & Garden", 0.0).is_ok());
}

#[test]
fn product_display() {
    let product = Product::new("rug", "Rug", "Home & Garden", 49.5).expect("valid product");
    assert_eq!(product.to_string(), "Product: Rug - $49.50 (Home & Garden)");
}

#[test]
fn customer_rejects_malformed_email() {
    for email in ["no-at-sign.com", "@example.com", "user@localhost"] {
        let err = Customer::new("CUST1", "Ada", email).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEmail {
                email: email.to_string()
            }
        );
    }
}

#[test]
fn customer_lifetime_value_counts_completed_orders_only() {
    let mut customer = Customer::new("CUST7", "Grace", "grace@example.com").expect("customer");
    let completed = Order::new("ORD1", None, "CUST7", vec![], 120.0, "completed").expect("order");
    let pending = Order::new("ORD2", None, "CUST7", vec![], 80.0, "pending").expect("order");
    customer.add_order(completed).expect("add completed");
    customer.add_order(pending).expect("add pending");

    assert_eq!(customer.order_count(), 2);
    assert!((customer.lifetime_value - 120.0).abs() < 1e-9);
    assert_eq!(customer.to_string(), "Customer: Grace (LTV: $120.00)");
}

#[test]
fn customer_rejects_negative_lifetime_increment() {
    let mut customer = Customer::new("CUST7", "Grace", "grace@example.com").expect("customer");
    let refund = Order::new("ORD3", None, "CUST7", vec![], -5.0, "completed").expect("order");
    assert!(customer.add_order(refund).is_err());
    assert_eq!(customer.order_count(), 0);
    assert_eq!(customer.lifetime_value, 0.0);
}

#[test]
fn order_rejects_unknown_status() {
    let err = Order::new("ORD9", None, "CUST1", vec![], 10.0, "shipped").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidStatus {
            status: "shipped".to_string()
        }
    );
}

#[test]
fn order_display_and_items() {
    let order = Order::new(
        "ORD5",
        None,
        "CUST1",
        vec!["Yoga Mat".to_string(), "Dumbbell".to_string()],
        75.25,
        "cancelled",
    )
    .expect("order");
    assert_eq!(order.item_count(), 2);
    assert_eq!(order.to_string(), "Order ORD5: $75.25 (cancelled)");
}

#[test]
fn factory_builds_entities_from_record() {
    let row = record("CUST12", Some(320.25));

    let product = EntityFactory::product_from_record(&row).expect("product");
    assert_eq!(product.id, "Laptop");
    assert_eq!(product.category, "Electronics");
    assert!((product.base_price - 320.25).abs() < 1e-9);

    let customer = EntityFactory::customer_from_record(&row).expect("customer");
    assert_eq!(customer.name, "Customer_CUST12");
    assert_eq!(customer.email, "customer_CUST12@example.com");

    let order = EntityFactory::order_from_record(&row).expect("order");
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.items, vec!["Laptop".to_string()]);
}

#[test]
fn factory_defaults_missing_price_and_rejects_missing_customer() {
    let product = EntityFactory::product_from_record(&record("CUST1", None)).expect("product");
    assert_eq!(product.base_price, 0.0);

    let err = EntityFactory::customer_from_record(&record("", None)).unwrap_err();
    assert_eq!(err, ValidationError::EmptyId);
}

#[test]
fn entities_serialize() {
    let product = Product::new("bike", "Bike", "Sports", 420.0).expect("product");
    let json = serde_json::to_value(&product).expect("serialize product");
    assert_eq!(json["category"], "Sports");
    assert_eq!(json["base_price"], 420.0);
}
