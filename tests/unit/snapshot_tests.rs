//! Integration tests for book snapshots.

use order_cache::{Order, OrderBook};

fn book() -> OrderBook {
    let mut book = OrderBook::new();
    book.add_order(Order::new("1", "SecId1", "Buy", 1000, "User1", "CompanyA"))
        .unwrap();
    book.add_order(Order::new("2", "SecId1", "Sell", 300, "User2", "CompanyB"))
        .unwrap();
    book.add_order(Order::new("3", "SecId2", "Sell", 50, "User3", "CompanyC"))
        .unwrap();
    book
}

#[test]
fn empty_book_snapshot() {
    let snapshot = OrderBook::new().snapshot();
    assert_eq!(snapshot.order_count(), 0);
    assert_eq!(snapshot.reserved_ids, 0);
    assert!(snapshot.timestamp > 0);
}

#[test]
fn snapshot_after_matching() {
    let mut book = book();
    book.get_matching_size_for_security("SecId1").unwrap();

    let snapshot = book.snapshot();
    assert_eq!(snapshot.buys.len(), 1);
    assert_eq!(snapshot.sells.len(), 1);
    assert_eq!(snapshot.total_buy_quantity(), 700);
    assert_eq!(snapshot.total_sell_quantity(), 50);
    assert_eq!(snapshot.reserved_ids, 3);
}

#[test]
fn snapshot_is_detached_from_book() {
    let mut book = book();
    let snapshot = book.snapshot();
    book.clear();

    assert_eq!(snapshot.order_count(), 3);
    assert!(book.snapshot().buys.is_empty());
}

#[test]
fn snapshot_json_carries_remaining_quantity() {
    let mut book = book();
    book.get_matching_size_for_security("SecId1").unwrap();

    let json = book.snapshot_to_json().unwrap();
    assert!(json.contains("\"remaining_quantity\":700"));
    assert!(json.contains("\"reserved_ids\":3"));
}
