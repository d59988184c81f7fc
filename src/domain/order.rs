use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// One requested cart line. `name` and `price` are snapshotted into the
/// order items so historical orders survive later product edits.
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub customer: CustomerProfile,
    pub payment_method: String,
    pub total_amount: i64,
    pub lines: Vec<CheckoutLine>,
}

#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order_id: i32,
    pub transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct OrderView {
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

/// An order plus its line summary, e.g. `"Radiator x1, Air Filter x2"`.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: OrderView,
    pub items: String,
}
