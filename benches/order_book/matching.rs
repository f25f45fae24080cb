use super::{SECURITIES, generate_orders};
use criterion::{BenchmarkId, Criterion};
use order_cache::OrderBook;
use std::hint::black_box;

/// Register all benchmarks for quantity matching.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Matching");

    // Many securities, few orders each
    for &order_count in &[1_000, 10_000, 100_000] {
        let orders = generate_orders(order_count, SECURITIES, 11);
        group.bench_with_input(
            BenchmarkId::new("match_all_securities", order_count),
            &orders,
            |b, orders| {
                b.iter_with_setup(
                    || {
                        let mut book = OrderBook::with_capacity(orders.len());
                        for order in orders.iter().cloned() {
                            let _ = book.add_order(order);
                        }
                        book
                    },
                    |mut book| {
                        let mut total = 0;
                        for security in book.securities() {
                            total += book.get_matching_size_for_security(&security).unwrap_or(0);
                        }
                        black_box(total)
                    },
                );
            },
        );
    }

    // One deep security: the nested scan dominates
    for &order_count in &[100, 1_000, 5_000] {
        let orders = generate_orders(order_count, 1, 13);
        group.bench_with_input(
            BenchmarkId::new("match_single_security", order_count),
            &orders,
            |b, orders| {
                b.iter_with_setup(
                    || {
                        let mut book = OrderBook::with_capacity(orders.len());
                        for order in orders.iter().cloned() {
                            let _ = book.add_order(order);
                        }
                        book
                    },
                    |mut book| black_box(book.get_matching_size_for_security("SecId0")),
                );
            },
        );
    }

    group.finish();
}
