use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error("insufficient stock for product: {product}")]
    StockShortage { product: String },
    #[error("transaction failed: {0}")]
    Transaction(String),
}
