//! Column names of the sales order file, in source order.

pub const ORDER_ID: &str = "order_id";
pub const CUSTOMER_ID: &str = "customer_id";
pub const ORDER_DATE: &str = "order_date";
pub const PRODUCT_CATEGORY: &str = "product_category";
pub const PRODUCT_NAME: &str = "product_name";
pub const QUANTITY: &str = "quantity";
pub const UNIT_PRICE: &str = "unit_price";
pub const ORDER_AMOUNT: &str = "order_amount";
pub const STATUS: &str = "status";

/// Required columns, in the order they are written on export.
pub const ORDER_COLUMNS: [&str; 9] = [
    ORDER_ID,
    CUSTOMER_ID,
    ORDER_DATE,
    PRODUCT_CATEGORY,
    PRODUCT_NAME,
    QUANTITY,
    UNIT_PRICE,
    ORDER_AMOUNT,
    STATUS,
];
