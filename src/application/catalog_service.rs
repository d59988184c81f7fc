use crate::domain::catalog::Product;
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogStore;

pub struct CatalogService<C> {
    store: C,
}

impl<C: CatalogStore> CatalogService<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    pub fn list_available(&self) -> Result<Vec<Product>, DomainError> {
        self.store.list_available()
    }

    pub fn get_product(&self, id: i32) -> Result<Option<Product>, DomainError> {
        self.store.find_by_id(id)
    }

    /// Administrative stock overwrite. Stock can be zeroed but never set
    /// negative.
    pub fn set_stock(&self, id: i32, stock: i32) -> Result<(), DomainError> {
        if stock < 0 {
            return Err(DomainError::Validation(
                "stock must not be negative".to_string(),
            ));
        }
        self.store.set_stock(id, stock)
    }
}
