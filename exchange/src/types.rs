use common::types::{OrderId, Price, Quantity};

/// One side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeLeg {
    pub id: OrderId,
    pub price: Price,
    pub qty: Quantity,
}

/// A single match between a resting order and an incoming order.
///
/// Both legs' prices are recorded - the bid leg at the buy order's price,
/// the ask leg at the sell order's price - rather than collapsing to one
/// "trade price". Picking a single printed price (maker's, taker's, or
/// mid) is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub bid: TradeLeg,
    pub ask: TradeLeg,
}

/// An aggregated price level, as reported by a book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub price: Price,
    pub qty: Quantity,
    pub order_count: usize,
}
