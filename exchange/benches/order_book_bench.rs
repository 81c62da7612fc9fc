// Benchmarks for order book operations
//
// Tests:
// - add latency (resting and crossing)
// - cancel latency
// - snapshot latency at varying book depths

use common::types::{OrderType, Side};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exchange::OrderBook;

const CAP: usize = 1_000_000;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_book_add");

    group.bench_function("add_resting_order", |b| {
        let mut book = OrderBook::<CAP>::new();
        let mut order_id = 1u64;
        let mut price = 0i32;
        b.iter(|| {
            let trades = book.add(
                black_box(order_id),
                black_box(Side::Buy),
                black_box(OrderType::GoodTillCancel),
                black_box(price),
                black_box(100),
            );
            black_box(trades);
            order_id += 1;
            price -= 1; // never crosses an ask, always rests
        });
    });

    group.bench_function("add_crossing_order", |b| {
        let mut book = OrderBook::<CAP>::new();
        let mut next_id = 1u64;
        b.iter(|| {
            book.add(
                black_box(next_id),
                black_box(Side::Sell),
                black_box(OrderType::GoodTillCancel),
                black_box(10_000),
                black_box(100),
            );
            next_id += 1;
            let trades = book.add(
                black_box(next_id),
                black_box(Side::Buy),
                black_box(OrderType::FillAndKill),
                black_box(10_000),
                black_box(100),
            );
            black_box(trades);
            next_id += 1;
        });
    });

    for depth in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("add_at_book_depth", depth), depth, |b, &depth| {
            let mut book = OrderBook::<CAP>::new();
            for i in 0..depth {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let price = if side == Side::Buy { 10_000 - i as i32 } else { 10_100 + i as i32 };
                book.add(i as u64, side, OrderType::GoodTillCancel, price, 100);
            }
            let mut order_id = depth as u64 + 1;
            b.iter(|| {
                let trades = book.add(
                    black_box(order_id),
                    black_box(Side::Buy),
                    black_box(OrderType::GoodTillCancel),
                    black_box(9_000 - order_id as i32),
                    black_box(100),
                );
                black_box(trades);
                order_id += 1;
            });
        });
    }
}

fn bench_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_book_cancel");

    group.bench_function("cancel_resting_order", |b| {
        let mut book = OrderBook::<CAP>::new();
        let mut next_id = 0u64;
        b.iter(|| {
            next_id += 1;
            book.add(next_id, Side::Buy, OrderType::GoodTillCancel, 9_000, 100);
            black_box(book.cancel(black_box(next_id)));
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_book_snapshot");

    for depth in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("snapshot_at_depth", depth), depth, |b, &depth| {
            let mut book = OrderBook::<CAP>::new();
            for i in 0..depth {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let price = if side == Side::Buy { 10_000 - i as i32 } else { 10_100 + i as i32 };
                book.add(i as u64, side, OrderType::GoodTillCancel, price, 100);
            }
            b.iter(|| black_box(book.snapshot()));
        });
    }
}

criterion_group!(benches, bench_add, bench_cancel, bench_snapshot);
criterion_main!(benches);
