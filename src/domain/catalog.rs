use chrono::NaiveDateTime;

/// A catalog product. Prices are integers in the smallest currency unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub stock: i32,
    pub created_at: NaiveDateTime,
}
