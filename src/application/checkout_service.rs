use crate::domain::errors::DomainError;
use crate::domain::order::{CheckoutOrder, CheckoutReceipt, OrderDetail, OrderView};
use crate::domain::ports::OrderStore;

pub struct CheckoutService<S> {
    store: S,
}

impl<S: OrderStore> CheckoutService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the cart, then hand it to the store's atomic checkout.
    ///
    /// The submitted total must equal the recomputed sum of the line items;
    /// the client-side total is never trusted. Validation failures return
    /// before any store access, so they have no side effects.
    pub fn checkout(&self, order: CheckoutOrder) -> Result<CheckoutReceipt, DomainError> {
        if order.lines.is_empty() {
            return Err(DomainError::Validation(
                "order contains no items".to_string(),
            ));
        }

        for line in &order.lines {
            if line.quantity < 1 {
                return Err(DomainError::Validation(format!(
                    "invalid quantity for product: {}",
                    line.name
                )));
            }
            if line.price < 0 {
                return Err(DomainError::Validation(format!(
                    "invalid price for product: {}",
                    line.name
                )));
            }
        }

        let computed: i64 = order
            .lines
            .iter()
            .map(|l| l.price * i64::from(l.quantity))
            .sum();
        if computed != order.total_amount {
            return Err(DomainError::Validation(format!(
                "total_amount {} does not match sum of line items {}",
                order.total_amount, computed
            )));
        }

        self.store.place_order(order)
    }

    pub fn get_order(&self, id: i32) -> Result<Option<OrderDetail>, DomainError> {
        self.store.find_by_id(id)
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::CheckoutService;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{
        CheckoutLine, CheckoutOrder, CheckoutReceipt, CustomerProfile, OrderDetail, OrderView,
    };
    use crate::domain::ports::OrderStore;

    #[derive(Default)]
    struct RecordingStore {
        placed: Mutex<Vec<CheckoutOrder>>,
    }

    impl OrderStore for RecordingStore {
        fn place_order(&self, order: CheckoutOrder) -> Result<CheckoutReceipt, DomainError> {
            self.placed.lock().unwrap().push(order);
            Ok(CheckoutReceipt {
                order_id: 1,
                transaction_id: "TRX-test".to_string(),
            })
        }

        fn find_by_id(&self, _id: i32) -> Result<Option<OrderDetail>, DomainError> {
            Ok(None)
        }

        fn list(&self) -> Result<Vec<OrderView>, DomainError> {
            Ok(vec![])
        }
    }

    fn order(total_amount: i64, lines: Vec<CheckoutLine>) -> CheckoutOrder {
        CheckoutOrder {
            customer: CustomerProfile {
                name: "Sam Putra".to_string(),
                email: "sam@example.com".to_string(),
                phone: "+62-812-333-444".to_string(),
                address: "7 Garage Road".to_string(),
            },
            payment_method: "cod".to_string(),
            total_amount,
            lines,
        }
    }

    fn line(quantity: i32, price: i64) -> CheckoutLine {
        CheckoutLine {
            product_id: 1,
            name: "Radiator".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn empty_cart_is_rejected() {
        let service = CheckoutService::new(RecordingStore::default());

        let err = service.checkout(order(0, vec![])).expect_err("should fail");

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.store.placed.lock().unwrap().is_empty());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let service = CheckoutService::new(RecordingStore::default());

        let err = service
            .checkout(order(0, vec![line(0, 1_200_000)]))
            .expect_err("should fail");

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let service = CheckoutService::new(RecordingStore::default());

        let err = service
            .checkout(order(-500, vec![line(1, -500)]))
            .expect_err("should fail");

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn mismatched_total_is_rejected_without_store_access() {
        let service = CheckoutService::new(RecordingStore::default());

        // Client claims 1 while the line sum is 2 * 1_200_000.
        let err = service
            .checkout(order(1, vec![line(2, 1_200_000)]))
            .expect_err("should fail");

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.store.placed.lock().unwrap().is_empty());
    }

    #[test]
    fn matching_total_is_placed() {
        let service = CheckoutService::new(RecordingStore::default());

        let receipt = service
            .checkout(order(2 * 1_200_000, vec![line(2, 1_200_000)]))
            .expect("checkout failed");

        assert_eq!(receipt.order_id, 1);
        assert_eq!(receipt.transaction_id, "TRX-test");
        assert_eq!(service.store.placed.lock().unwrap().len(), 1);
    }
}
