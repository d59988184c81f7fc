pub mod catalog_repo;
pub mod models;
pub mod order_repo;

pub use catalog_repo::DieselCatalogStore;
pub use order_repo::DieselOrderStore;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Transaction(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Transaction(e.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use diesel::prelude::*;
    use diesel_migrations::MigrationHarness;

    use crate::db::{create_pool, DbPool};
    use crate::schema::products;

    use super::models::NewProductRow;

    /// Pool over a throwaway SQLite file with migrations applied. The
    /// `TempDir` must stay alive for the duration of the test.
    pub fn test_pool() -> (tempfile::TempDir, DbPool) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("storefront.db");
        let pool = create_pool(db_path.to_str().expect("path is valid UTF-8"));
        {
            let mut conn = pool.get().expect("Failed to get connection");
            conn.run_pending_migrations(crate::MIGRATIONS)
                .expect("Failed to run migrations");
        }
        (dir, pool)
    }

    /// Insert a product fixture and return its id.
    pub fn insert_product(pool: &DbPool, name: &str, price: i64, stock: i32) -> i32 {
        let mut conn = pool.get().expect("Failed to get connection");
        diesel::insert_into(products::table)
            .values(&NewProductRow {
                name,
                price,
                category: "Test",
                image: "🔧",
                rating: 4.5,
                stock,
            })
            .returning(products::id)
            .get_result(&mut conn)
            .expect("insert failed")
    }

    /// Current stock for a product, bypassing the repositories.
    pub fn stock_of(pool: &DbPool, id: i32) -> i32 {
        let mut conn = pool.get().expect("Failed to get connection");
        products::table
            .filter(products::id.eq(id))
            .select(products::stock)
            .first(&mut conn)
            .expect("query failed")
    }
}
