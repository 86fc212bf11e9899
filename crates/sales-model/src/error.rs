use thiserror::Error;

/// Construction-time failure for the entity model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("id must be a non-empty string")]
    EmptyId,
    #[error("name must be a non-empty string")]
    EmptyName,
    #[error("price cannot be negative: {price}")]
    NegativePrice { price: f64 },
    #[error("amount cannot be negative: {amount}")]
    NegativeAmount { amount: f64 },
    #[error("invalid email format: {email}")]
    InvalidEmail { email: String },
    #[error("status must be one of pending, completed, cancelled (got {status:?})")]
    InvalidStatus { status: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
