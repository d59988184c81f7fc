use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{CheckoutOrder, CheckoutReceipt, OrderDetail, OrderView};
use crate::domain::ports::OrderStore;
use crate::schema::{order_items, orders, payments, products};

use super::models::{NewOrderItemRow, NewOrderRow, NewPaymentRow, OrderRow};

pub struct DieselOrderStore {
    pool: DbPool,
}

impl DieselOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderStore for DieselOrderStore {
    /// The checkout transaction. Runs under `BEGIN IMMEDIATE` so the write
    /// lock is held from the start: the stock read and the decrement cannot
    /// interleave with another writer, which is what keeps stock from going
    /// negative under concurrent checkouts.
    fn place_order(&self, order: CheckoutOrder) -> Result<CheckoutReceipt, DomainError> {
        let mut conn = self.pool.get()?;

        conn.immediate_transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order in `pending` state to obtain its id.
            let order_id: i32 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_name: &order.customer.name,
                    email: &order.customer.email,
                    phone: &order.customer.phone,
                    address: &order.customer.address,
                    total_amount: order.total_amount,
                    payment_method: &order.payment_method,
                    status: "pending",
                })
                .returning(orders::id)
                .get_result(conn)?;

            // 2. Per line: re-read stock inside the transaction, snapshot the
            //    item, decrement stock. The first short line aborts the whole
            //    order.
            for line in &order.lines {
                let stock: Option<i32> = products::table
                    .filter(products::id.eq(line.product_id))
                    .select(products::stock)
                    .first(conn)
                    .optional()?;

                let stock = stock.ok_or(DomainError::NotFound)?;
                if line.quantity > stock {
                    return Err(DomainError::StockShortage {
                        product: line.name.clone(),
                    });
                }

                diesel::insert_into(order_items::table)
                    .values(&NewOrderItemRow {
                        order_id,
                        product_id: line.product_id,
                        product_name: &line.name,
                        quantity: line.quantity,
                        price: line.price,
                    })
                    .execute(conn)?;

                diesel::update(products::table.filter(products::id.eq(line.product_id)))
                    .set(products::stock.eq(products::stock - line.quantity))
                    .execute(conn)?;
            }

            // 3. Record the simulated payment and complete the order.
            let transaction_id = format!("TRX-{}", Uuid::new_v4());
            diesel::insert_into(payments::table)
                .values(&NewPaymentRow {
                    order_id,
                    payment_method: &order.payment_method,
                    amount: order.total_amount,
                    status: "completed",
                    transaction_id: &transaction_id,
                })
                .execute(conn)?;

            diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(orders::status.eq("completed"))
                .execute(conn)?;

            Ok(CheckoutReceipt {
                order_id,
                transaction_id,
            })
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderDetail>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let lines: Vec<(String, i32)> = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .select((order_items::product_name, order_items::quantity))
            .load(&mut conn)?;

        let items = lines
            .iter()
            .map(|(name, quantity)| format!("{} x{}", name, quantity))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Some(OrderDetail {
            order: order.into(),
            items,
        }))
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        // created_at has second granularity, so id breaks ties for orders
        // placed within the same second.
        let rows = orders::table
            .select(OrderRow::as_select())
            .order((orders::created_at.desc(), orders::id.desc()))
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderView::from).collect())
    }
}
