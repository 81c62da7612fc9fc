//! Order book demo harness.
//!
//! Replays a textual event trace through an `OrderBook` and reports the
//! resulting trades plus a final snapshot. This is a driver sitting on top
//! of the matching engine core, not part of it - the core never touches a
//! file or stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use common::types::{OrderType, Price, Quantity, Side};
use exchange::OrderBook;

/// Order book event trace replayer
#[derive(Parser, Debug)]
#[command(name = "exchange")]
#[command(about = "Replays an order event trace through the order book")]
struct Args {
    /// Path to a trace file, one event per line
    events: PathBuf,
}

/// One line of the event trace.
///
/// Supported forms:
/// - `ADD <id> <BUY|SELL> <GTC|FAK> <price> <qty>`
/// - `CANCEL <id>`
/// - `MODIFY <id> <price> <qty>`
///
/// Blank lines and lines starting with `#` are ignored.
enum Event {
    Add {
        id: u64,
        side: Side,
        order_type: OrderType,
        price: Price,
        qty: Quantity,
    },
    Cancel {
        id: u64,
    },
    Modify {
        id: u64,
        price: Price,
        qty: Quantity,
    },
}

fn parse_side(s: &str) -> Option<Side> {
    match s.to_ascii_uppercase().as_str() {
        "BUY" => Some(Side::Buy),
        "SELL" => Some(Side::Sell),
        _ => None,
    }
}

fn parse_order_type(s: &str) -> Option<OrderType> {
    match s.to_ascii_uppercase().as_str() {
        "GTC" => Some(OrderType::GoodTillCancel),
        "FAK" => Some(OrderType::FillAndKill),
        _ => None,
    }
}

fn parse_event(line: &str) -> Result<Event, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        ["ADD", id, side, order_type, price, qty] => Ok(Event::Add {
            id: id.parse().map_err(|_| "bad id")?,
            side: parse_side(side).ok_or("bad side")?,
            order_type: parse_order_type(order_type).ok_or("bad order type")?,
            price: price.parse().map_err(|_| "bad price")?,
            qty: qty.parse().map_err(|_| "bad qty")?,
        }),
        ["CANCEL", id] => Ok(Event::Cancel {
            id: id.parse().map_err(|_| "bad id")?,
        }),
        ["MODIFY", id, price, qty] => Ok(Event::Modify {
            id: id.parse().map_err(|_| "bad id")?,
            price: price.parse().map_err(|_| "bad price")?,
            qty: qty.parse().map_err(|_| "bad qty")?,
        }),
        _ => Err(format!("unrecognized event: {}", line)),
    }
}

fn run<const CAP: usize>(events: PathBuf) -> io::Result<()> {
    let mut book = OrderBook::<CAP>::new();
    let file = File::open(&events)?;

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event = match parse_event(line) {
            Ok(event) => event,
            Err(e) => {
                eprintln!("line {}: {}", lineno + 1, e);
                continue;
            }
        };

        let trades = match event {
            Event::Add {
                id,
                side,
                order_type,
                price,
                qty,
            } => book.add(id, side, order_type, price, qty),
            Event::Cancel { id } => {
                book.cancel(id);
                Vec::new()
            }
            Event::Modify { id, price, qty } => book.modify(id, price, qty),
        };

        for trade in trades {
            println!(
                "TRADE bid={} ask={} price(bid)={} price(ask)={} qty={}",
                trade.bid.id, trade.ask.id, trade.bid.price, trade.ask.price, trade.bid.qty
            );
        }
    }

    let (bids, asks) = book.snapshot();
    println!("--- snapshot ---");
    for level in &bids {
        println!("BID {} qty={} orders={}", level.price, level.qty, level.order_count);
    }
    for level in &asks {
        println!("ASK {} qty={} orders={}", level.price, level.qty, level.order_count);
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    run::<100_000>(args.events)
}
