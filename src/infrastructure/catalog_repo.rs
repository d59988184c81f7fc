use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::Product;
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogStore;
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

/// Launch inventory, inserted once when the products table is empty:
/// (name, price, category, glyph, rating, stock).
const DEMO_PRODUCTS: &[(&str, i64, &str, &str, f64, i32)] = &[
    ("Brake Disc Set", 450_000, "Brakes", "🔧", 4.8, 25),
    ("Engine Oil Filter", 150_000, "Engine", "⚙️", 4.9, 50),
    ("Spark Plug Set", 320_000, "Engine", "⚡", 4.7, 30),
    ("Air Filter", 180_000, "Engine", "🌀", 4.6, 40),
    ("Shock Absorber", 850_000, "Suspension", "🔩", 4.8, 15),
    ("Radiator", 1_200_000, "Cooling", "❄️", 4.9, 10),
    ("12V Battery", 950_000, "Electrical", "🔋", 4.7, 20),
    ("Alternator", 1_500_000, "Electrical", "⚡", 4.8, 8),
];

pub struct DieselCatalogStore {
    pool: DbPool,
}

impl DieselCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert the demo catalog if the products table is empty. Returns the
    /// number of rows inserted (0 when the table already has products).
    pub fn seed_demo_products(&self) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let count: i64 = products::table.count().get_result(&mut conn)?;
        if count > 0 {
            return Ok(0);
        }

        let rows: Vec<NewProductRow> = DEMO_PRODUCTS
            .iter()
            .map(|&(name, price, category, image, rating, stock)| NewProductRow {
                name,
                price,
                category,
                image,
                rating,
                stock,
            })
            .collect();

        Ok(diesel::insert_into(products::table)
            .values(&rows)
            .execute(&mut conn)?)
    }
}

impl CatalogStore for DieselCatalogStore {
    fn list_available(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::stock.gt(0))
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .filter(products::id.eq(id))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn set_stock(&self, id: i32, stock: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let updated = diesel::update(products::table.filter(products::id.eq(id)))
            .set(products::stock.eq(stock))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DieselCatalogStore;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::CatalogStore;
    use crate::infrastructure::test_support::{insert_product, stock_of, test_pool};

    #[test]
    fn seed_is_applied_once() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool);

        let first = repo.seed_demo_products().expect("seed failed");
        assert_eq!(first, 8);

        let second = repo.seed_demo_products().expect("seed failed");
        assert_eq!(second, 0, "seeding must not run on a populated table");

        assert_eq!(repo.list_available().expect("list failed").len(), 8);
    }

    #[test]
    fn insert_then_fetch_roundtrips_all_fields() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool.clone());
        let id = insert_product(&pool, "Fuel Pump", 675_000, 12);

        let product = repo
            .find_by_id(id)
            .expect("find failed")
            .expect("product should exist");

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Fuel Pump");
        assert_eq!(product.price, 675_000);
        assert_eq!(product.category, "Test");
        assert_eq!(product.image, "🔧");
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool);

        assert!(repo.find_by_id(9999).expect("find failed").is_none());
    }

    #[test]
    fn list_available_skips_out_of_stock_and_orders_by_id() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool.clone());
        let a = insert_product(&pool, "Clutch Kit", 900_000, 3);
        let _empty = insert_product(&pool, "Timing Belt", 250_000, 0);
        let b = insert_product(&pool, "Wiper Blades", 95_000, 18);

        let products = repo.list_available().expect("list failed");

        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn set_stock_overwrites_and_is_idempotent() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool.clone());
        let id = insert_product(&pool, "Radiator Cap", 45_000, 7);

        repo.set_stock(id, 42).expect("set_stock failed");
        assert_eq!(stock_of(&pool, id), 42);

        repo.set_stock(id, 42).expect("set_stock failed");
        assert_eq!(stock_of(&pool, id), 42);
    }

    #[test]
    fn set_stock_reports_unknown_product() {
        let (_dir, pool) = test_pool();
        let repo = DieselCatalogStore::new(pool);

        let err = repo.set_stock(9999, 5).expect_err("should fail");
        assert!(matches!(err, DomainError::NotFound));
    }
}
