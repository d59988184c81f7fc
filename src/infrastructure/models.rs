use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::catalog::Product;
use crate::domain::order::OrderView;
use crate::schema::{order_items, orders, payments, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub stock: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub price: i64,
    pub category: &'a str,
    pub image: &'a str,
    pub rating: f64,
    pub stock: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            category: row.category,
            image: row.image,
            rating: row.rating,
            stock: row.stock,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: i32,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_amount: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub customer_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub total_amount: i64,
    pub payment_method: &'a str,
    pub status: &'a str,
}

impl From<OrderRow> for OrderView {
    fn from(row: OrderRow) -> Self {
        OrderView {
            id: row.id,
            customer_name: row.customer_name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            total_amount: row.total_amount,
            payment_method: row.payment_method,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow<'a> {
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: &'a str,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentRow {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub status: String,
    pub transaction_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = payments)]
pub struct NewPaymentRow<'a> {
    pub order_id: i32,
    pub payment_method: &'a str,
    pub amount: i64,
    pub status: &'a str,
    pub transaction_id: &'a str,
}
