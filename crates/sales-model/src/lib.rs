pub mod columns;
pub mod entity;
pub mod error;
pub mod record;
pub mod status;

pub use columns::ORDER_COLUMNS;
pub use entity::{Customer, EntityFactory, Order, Product};
pub use error::{Result, ValidationError};
pub use record::{CleanRecord, RawRecord, YearMonth, format_numeric};
pub use status::OrderStatus;
