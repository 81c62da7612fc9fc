use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use common::mem_pool::{MemPool, PoolError};
use common::types::{OrderId, OrderType, Price, Quantity, Side};

use crate::level::PriceLevel;
use crate::order::Order;
use crate::types::{Level, Trade, TradeLeg};

/// A single-venue, single-symbol limit order book.
///
/// `CAP` bounds the number of orders that may be resting or in-flight at
/// once; it backs a fixed-capacity `MemPool` so the book never allocates on
/// the matching hot path after construction. Bids are kept in descending
/// price order, asks in ascending price order, each level a FIFO of the
/// orders resting at that price.
///
/// Single-threaded by contract - like `common::mem_pool::MemPool`, this type
/// relies on documented single-threaded use rather than a `Sync` bound.
pub struct OrderBook<const CAP: usize> {
    pool: Box<MemPool<Order, CAP>>,
    bids: BTreeMap<Reverse<Price>, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
    index: HashMap<OrderId, usize>,
}

impl<const CAP: usize> OrderBook<CAP> {
    pub fn new() -> Self {
        Self {
            pool: MemPool::new_boxed(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Number of orders currently known to the book (resting or, briefly,
    /// mid-match).
    #[inline]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Submits a new order.
    ///
    /// Duplicate IDs are a silent no-op (returns an empty trade list). A
    /// `FillAndKill` order that does not fully fill is discarded instead of
    /// resting. Returns every trade the order participated in, in the order
    /// they occurred.
    ///
    /// # Panics
    ///
    /// Panics if the book's order pool is exhausted - `CAP` is a deliberate
    /// upper bound, so exhausting it is a configuration error, not a
    /// data-dependent one.
    pub fn add(
        &mut self,
        id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        qty: Quantity,
    ) -> Vec<Trade> {
        if self.index.contains_key(&id) {
            return Vec::new();
        }

        let order = Order::new(id, side, order_type, price, qty);
        let slot = match self.pool.allocate_index(order) {
            Ok(slot) => slot,
            Err(PoolError::Exhausted) => panic!("order pool exhausted (capacity {})", CAP),
            Err(PoolError::AlienPointer) => unreachable!("allocate_index never returns AlienPointer"),
        };
        self.index.insert(id, slot);

        let trades = self.match_orders(slot);

        let (remaining, order_type) = {
            let order = self.pool.get_ref(slot).expect("just-allocated slot");
            (order.remaining_qty, order.order_type)
        };

        if remaining == 0 {
            self.index.remove(&id);
            self.release(slot);
        } else if order_type == OrderType::FillAndKill {
            self.index.remove(&id);
            self.release(slot);
        } else {
            self.insert_into_level(side, price, slot);
        }

        trades
    }

    /// Cancels a resting order by ID. Unknown IDs are a silent no-op.
    /// Returns whether an order was actually cancelled.
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let slot = match self.index.remove(&id) {
            Some(slot) => slot,
            None => return false,
        };

        let (side, price) = {
            let order = self.pool.get_ref(slot).expect("indexed slot must be live");
            (order.side, order.price)
        };

        self.remove_from_book(side, price, slot);
        self.release(slot);
        true
    }

    /// Replaces a resting order's price/quantity. Implemented as cancel
    /// followed by re-add, which loses the order's time priority at its new
    /// price - matching how the rest of the book treats a changed price or
    /// quantity as a new arrival. Unknown IDs are a silent no-op.
    pub fn modify(&mut self, id: OrderId, new_price: Price, new_qty: Quantity) -> Vec<Trade> {
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => return Vec::new(),
        };

        let (side, order_type) = {
            let order = self.pool.get_ref(slot).expect("indexed slot must be live");
            (order.side, order.order_type)
        };

        self.cancel(id);
        self.add(id, side, order_type, new_price, new_qty)
    }

    /// Aggregated bid and ask levels, best price first on each side.
    pub fn snapshot(&self) -> (Vec<Level>, Vec<Level>) {
        let bids = self
            .bids
            .iter()
            .map(|(Reverse(price), level)| Self::aggregate(*price, level, &self.pool))
            .collect();
        let asks = self
            .asks
            .iter()
            .map(|(price, level)| Self::aggregate(*price, level, &self.pool))
            .collect();
        (bids, asks)
    }

    fn aggregate(price: Price, level: &PriceLevel, pool: &MemPool<Order, CAP>) -> Level {
        let mut qty = 0;
        let mut order_count = 0;
        for order in level.iter(pool) {
            qty += order.remaining_qty;
            order_count += 1;
        }
        Level {
            price,
            qty,
            order_count,
        }
    }

    /// Whether an order at `price` on `side` would cross the opposite
    /// side's best level.
    fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self
                .asks
                .keys()
                .next()
                .map_or(false, |&best_ask| price >= best_ask),
            Side::Sell => self
                .bids
                .keys()
                .next()
                .map_or(false, |&Reverse(best_bid)| price <= best_bid),
        }
    }

    /// Matches the order at `taker_slot` against the opposite side of the
    /// book until it is filled or no longer crosses. Collapses the
    /// outer/inner matching loop into one: each iteration re-reads the
    /// current best opposite level, which is exactly the inner loop's exit
    /// condition re-evaluated - so a single loop is equivalent.
    fn match_orders(&mut self, taker_slot: usize) -> Vec<Trade> {
        let mut trades = Vec::new();

        loop {
            let (taker_side, taker_price) = {
                let taker = self.pool.get_ref(taker_slot).expect("taker slot must be live");
                if taker.is_filled() {
                    break;
                }
                (taker.side, taker.price)
            };

            if !self.can_match(taker_side, taker_price) {
                break;
            }

            let maker_slot = match taker_side {
                Side::Buy => self
                    .asks
                    .values()
                    .next()
                    .expect("can_match confirmed a best ask exists")
                    .front()
                    .expect("non-empty level has a front"),
                Side::Sell => self
                    .bids
                    .values()
                    .next()
                    .expect("can_match confirmed a best bid exists")
                    .front()
                    .expect("non-empty level has a front"),
            };

            let (taker_id, taker_remaining) = {
                let taker = self.pool.get_ref(taker_slot).unwrap();
                (taker.id, taker.remaining_qty)
            };
            let (maker_id, maker_price, maker_remaining) = {
                let maker = self.pool.get_ref(maker_slot).expect("alien maker slot");
                (maker.id, maker.price, maker.remaining_qty)
            };

            let trade_qty = taker_remaining.min(maker_remaining);

            self.pool
                .get_by_index(taker_slot)
                .expect("taker slot must be live")
                .fill(trade_qty);
            self.pool
                .get_by_index(maker_slot)
                .expect("alien maker slot")
                .fill(trade_qty);

            let (bid_leg, ask_leg) = match taker_side {
                Side::Buy => (
                    TradeLeg {
                        id: taker_id,
                        price: taker_price,
                        qty: trade_qty,
                    },
                    TradeLeg {
                        id: maker_id,
                        price: maker_price,
                        qty: trade_qty,
                    },
                ),
                Side::Sell => (
                    TradeLeg {
                        id: maker_id,
                        price: maker_price,
                        qty: trade_qty,
                    },
                    TradeLeg {
                        id: taker_id,
                        price: taker_price,
                        qty: trade_qty,
                    },
                ),
            };
            trades.push(Trade {
                bid: bid_leg,
                ask: ask_leg,
            });

            let maker_filled = self
                .pool
                .get_ref(maker_slot)
                .expect("alien maker slot")
                .is_filled();
            if maker_filled {
                self.remove_from_book(taker_side.opposite(), maker_price, maker_slot);
                self.index.remove(&maker_id);
                self.release(maker_slot);
            }
        }

        trades
    }

    fn insert_into_level(&mut self, side: Side, price: Price, slot: usize) {
        match side {
            Side::Buy => {
                let level = self
                    .bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(&self.pool, slot);
            }
            Side::Sell => {
                let level = self
                    .asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(&self.pool, slot);
            }
        }
    }

    fn remove_from_book(&mut self, side: Side, price: Price, slot: usize) {
        match side {
            Side::Buy => {
                let key = Reverse(price);
                if let Some(level) = self.bids.get_mut(&key) {
                    level.remove(&self.pool, slot);
                    if level.is_empty() {
                        self.bids.remove(&key);
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.remove(&self.pool, slot);
                    if level.is_empty() {
                        self.asks.remove(&price);
                    }
                }
            }
        }
    }

    fn release(&mut self, slot: usize) {
        self.pool
            .deallocate_by_index(slot)
            .expect("slot came from this pool");
    }
}

impl<const CAP: usize> Default for OrderBook<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
