use common::mem_pool::MemPool;
use common::types::Price;

use crate::order::Order;

/// A price-time-priority FIFO queue for all resting orders at one price.
///
/// Links between orders live on the `Order` records themselves (inside the
/// shared pool); `PriceLevel` only tracks the head/tail slot indices and a
/// running count.
#[derive(Debug)]
pub struct PriceLevel {
    price: Price,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            size: 0,
        }
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn front(&self) -> Option<usize> {
        self.head
    }

    /// Links the order at `index` onto the tail of this level.
    pub fn push_back<const CAP: usize>(&mut self, pool: &MemPool<Order, CAP>, index: usize) {
        {
            let order = pool.get_by_index(index).expect("alien order index");
            order.prev = self.tail;
            order.next = None;
        }

        match self.tail {
            Some(tail_idx) => {
                pool.get_by_index(tail_idx).expect("alien tail index").next = Some(index);
            }
            None => self.head = Some(index),
        }

        self.tail = Some(index);
        self.size += 1;
    }

    /// Unlinks and returns the order at the head of this level, if any.
    pub fn pop_front<const CAP: usize>(&mut self, pool: &MemPool<Order, CAP>) -> Option<usize> {
        let head_idx = self.head?;
        self.remove(pool, head_idx);
        Some(head_idx)
    }

    /// Splices the order at `index` out of this level's FIFO, wherever it
    /// sits. Used both by `pop_front` and by order-by-ID cancellation.
    pub fn remove<const CAP: usize>(&mut self, pool: &MemPool<Order, CAP>, index: usize) {
        let (prev, next) = {
            let order = pool.get_by_index(index).expect("alien order index");
            (order.prev, order.next)
        };

        match prev {
            Some(prev_idx) => pool.get_by_index(prev_idx).expect("alien prev index").next = next,
            None => self.head = next,
        }

        match next {
            Some(next_idx) => pool.get_by_index(next_idx).expect("alien next index").prev = prev,
            None => self.tail = prev,
        }

        self.size -= 1;
    }

    pub fn iter<'a, const CAP: usize>(&self, pool: &'a MemPool<Order, CAP>) -> LevelIter<'a, CAP> {
        LevelIter {
            pool,
            current: self.head,
        }
    }
}

/// Forward iterator over the orders resting at a `PriceLevel`, head to tail.
pub struct LevelIter<'a, const CAP: usize> {
    pool: &'a MemPool<Order, CAP>,
    current: Option<usize>,
}

impl<'a, const CAP: usize> Iterator for LevelIter<'a, CAP> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let order = self.pool.get_ref(idx)?;
        self.current = order.next;
        Some(order)
    }
}
