// Core type definitions for the matching engine

// Type aliases
pub type OrderId = u64;
pub type Price = i32; // Venue-defined ticks
pub type Quantity = u32;

// Invalid/sentinel constants
pub const INVALID_ORDER_ID: OrderId = 0;
pub const INVALID_PRICE: Price = i32::MAX;
pub const INVALID_QUANTITY: Quantity = u32::MAX;

/// Represents the side of an order (buy or sell)
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy = 1,
    Sell = -1,
}

impl Side {
    /// Returns the opposite side
    #[inline]
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns the side as a sign value (1 for Buy, -1 for Sell)
    #[inline]
    pub fn as_sign(&self) -> i64 {
        *self as i64
    }
}

/// Time-in-force / liquidity-taking behaviour of an order.
///
/// `GoodTillCancel` rests on the book until filled or cancelled.
/// `FillAndKill` executes whatever it can immediately and is discarded
/// instead of resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    GoodTillCancel,
    FillAndKill,
}
