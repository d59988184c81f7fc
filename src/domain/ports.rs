use super::catalog::Product;
use super::errors::DomainError;
use super::order::{CheckoutOrder, CheckoutReceipt, OrderDetail, OrderView};

pub trait CatalogStore: Send + Sync + 'static {
    /// Products with stock remaining, ordered by id ascending.
    fn list_available(&self) -> Result<Vec<Product>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
    /// Administrative overwrite of a product's stock level.
    fn set_stock(&self, id: i32, stock: i32) -> Result<(), DomainError>;
}

pub trait OrderStore: Send + Sync + 'static {
    /// Place the order as a single all-or-nothing unit: order row, item
    /// snapshots, stock decrements, payment record. Nothing persists on
    /// failure.
    fn place_order(&self, order: CheckoutOrder) -> Result<CheckoutReceipt, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderDetail>, DomainError>;
    /// All orders, newest first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
}
