use common::types::{OrderId, OrderType, Price, Quantity, Side};

/// A single resting or in-flight order.
///
/// `prev`/`next` are pool-stable slot indices forming an intrusive FIFO
/// link within whichever `PriceLevel` currently holds this order. They are
/// `None` while the order is not linked into any level (e.g. a taker order
/// that is still being matched before it rests, or a freshly-filled order
/// about to be released back to the pool).
#[derive(Debug, Clone, Copy)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub initial_qty: Quantity,
    pub remaining_qty: Quantity,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Order {
    pub fn new(id: OrderId, side: Side, order_type: OrderType, price: Price, qty: Quantity) -> Self {
        Self {
            id,
            side,
            order_type,
            price,
            initial_qty: qty,
            remaining_qty: qty,
            prev: None,
            next: None,
        }
    }

    /// Reduces remaining quantity by `qty`.
    ///
    /// # Panics
    ///
    /// Panics if `qty` exceeds `remaining_qty` - matching more than an
    /// order has left is an internal bug, not a recoverable condition.
    #[inline]
    pub fn fill(&mut self, qty: Quantity) {
        assert!(
            qty <= self.remaining_qty,
            "fill quantity {} exceeds remaining {} for order {}",
            qty,
            self.remaining_qty,
            self.id
        );
        self.remaining_qty -= qty;
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.remaining_qty == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_starts_unfilled() {
        let order = Order::new(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
        assert_eq!(order.remaining_qty, 10);
        assert!(!order.is_filled());
    }

    #[test]
    fn fill_reduces_remaining_qty() {
        let mut order = Order::new(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
        order.fill(4);
        assert_eq!(order.remaining_qty, 6);
        order.fill(6);
        assert!(order.is_filled());
    }

    #[test]
    #[should_panic(expected = "exceeds remaining")]
    fn fill_over_remaining_panics() {
        let mut order = Order::new(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
        order.fill(11);
    }
}
