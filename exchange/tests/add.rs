use common::types::{OrderType, Side};
use exchange::OrderBook;

#[test]
fn duplicate_rejected() {
    let mut book = OrderBook::<16>::new();

    let trades = book.add(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
    assert!(trades.is_empty());
    assert_eq!(book.size(), 1);

    let trades = book.add(1, Side::Sell, OrderType::GoodTillCancel, 101, 5);
    assert!(trades.is_empty());
    assert_eq!(book.size(), 1);
}

#[test]
fn simple_cross() {
    let mut book = OrderBook::<16>::new();

    book.add(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
    let trades = book.add(2, Side::Sell, OrderType::GoodTillCancel, 100, 7);

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.id, 1);
    assert_eq!(trades[0].bid.price, 100);
    assert_eq!(trades[0].bid.qty, 7);
    assert_eq!(trades[0].ask.id, 2);
    assert_eq!(trades[0].ask.qty, 7);

    assert_eq!(book.size(), 1);
    let (bids, _) = book.snapshot();
    assert_eq!(bids[0].qty, 3);
}

#[test]
fn price_time_priority() {
    let mut book = OrderBook::<16>::new();

    book.add(1, Side::Buy, OrderType::GoodTillCancel, 100, 5);
    book.add(2, Side::Buy, OrderType::GoodTillCancel, 100, 5);
    let trades = book.add(3, Side::Sell, OrderType::GoodTillCancel, 100, 7);

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].bid.id, 1);
    assert_eq!(trades[0].bid.qty, 5);
    assert_eq!(trades[1].bid.id, 2);
    assert_eq!(trades[1].bid.qty, 2);

    assert_eq!(book.size(), 1);
    let (bids, _) = book.snapshot();
    assert_eq!(bids[0].qty, 3);
}

#[test]
fn fak_no_cross_is_dropped() {
    let mut book = OrderBook::<16>::new();
    book.add(1, Side::Buy, OrderType::GoodTillCancel, 99, 10);

    let trades = book.add(2, Side::Sell, OrderType::FillAndKill, 100, 5);

    assert!(trades.is_empty());
    assert_eq!(book.size(), 1);
}

#[test]
fn fak_partial_then_swept() {
    let mut book = OrderBook::<16>::new();
    book.add(1, Side::Buy, OrderType::GoodTillCancel, 100, 4);

    let trades = book.add(2, Side::Sell, OrderType::FillAndKill, 100, 10);

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.id, 1);
    assert_eq!(trades[0].bid.qty, 4);
    assert_eq!(trades[0].ask.id, 2);
    assert_eq!(trades[0].ask.qty, 4);

    assert_eq!(book.size(), 0);
}

#[test]
fn add_then_cancel_restores_size() {
    let mut book = OrderBook::<16>::new();
    let before = book.size();

    book.add(1, Side::Buy, OrderType::GoodTillCancel, 100, 10);
    book.cancel(1);

    assert_eq!(book.size(), before);
}
