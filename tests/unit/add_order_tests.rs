//! Integration tests for order admission.

use order_cache::{MalformedField, Order, OrderBook, OrderBookError};

fn valid(id: &str) -> Order {
    Order::new(id, "SecId1", "Buy", 100, "User1", "Company1")
}

fn assert_rejected_as(book: &mut OrderBook, order: Order, expected: MalformedField) {
    let before = book.get_all_orders();
    let reserved = book.reserved_id_count();

    match book.add_order(order) {
        Err(OrderBookError::MalformedInput { field }) => assert_eq!(field, expected),
        other => panic!("expected malformed input {expected:?}, got {other:?}"),
    }

    assert_eq!(book.get_all_orders(), before);
    assert_eq!(book.reserved_id_count(), reserved);
}

#[test]
fn add_valid_orders_lists_them() {
    let mut book = OrderBook::new();
    book.add_order(valid("1")).unwrap();
    book.add_order(Order::new("2", "SecId2", "Sell", 50, "User2", "Company2"))
        .unwrap();

    let mut ids: Vec<String> = book
        .get_all_orders()
        .iter()
        .map(|o| o.order_id().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(book.buy_count(), 1);
    assert_eq!(book.sell_count(), 1);
}

#[test]
fn add_rejects_each_empty_field() {
    let mut book = OrderBook::new();
    book.add_order(valid("existing")).unwrap();

    assert_rejected_as(
        &mut book,
        Order::new("", "SecId1", "Buy", 100, "User1", "Company1"),
        MalformedField::EmptyOrderId,
    );
    assert_rejected_as(
        &mut book,
        Order::new("1", "", "Buy", 100, "User1", "Company1"),
        MalformedField::EmptySecurityId,
    );
    assert_rejected_as(
        &mut book,
        Order::new("1", "SecId1", "Buy", 100, "", "Company1"),
        MalformedField::EmptyUser,
    );
    assert_rejected_as(
        &mut book,
        Order::new("1", "SecId1", "Buy", 100, "User1", ""),
        MalformedField::EmptyCompany,
    );
    assert_rejected_as(
        &mut book,
        Order::new("1", "SecId1", "", 100, "User1", "Company1"),
        MalformedField::EmptySide,
    );
}

#[test]
fn add_rejects_zero_quantity() {
    let mut book = OrderBook::new();
    assert_rejected_as(
        &mut book,
        Order::new("1", "SecId1", "Buy", 0, "User1", "Company1"),
        MalformedField::ZeroQuantity,
    );
}

#[test]
fn add_rejects_unknown_side_spellings() {
    let mut book = OrderBook::new();
    for side in ["buy", "SELL", "Bid", " Buy"] {
        assert_rejected_as(
            &mut book,
            Order::new("1", "SecId1", side, 100, "User1", "Company1"),
            MalformedField::InvalidSide(side.to_string()),
        );
    }
    assert!(book.is_empty());
}

#[test]
fn duplicate_is_reported_before_invalid_side() {
    let mut book = OrderBook::new();
    book.add_order(valid("1")).unwrap();

    let err = book
        .add_order(Order::new("1", "SecId1", "Hold", 100, "User1", "Company1"))
        .unwrap_err();
    assert!(matches!(err, OrderBookError::DuplicateOrderId(ref id) if id == "1"));
    assert_eq!(book.get_all_orders(), vec![valid("1")]);
}

#[test]
fn invalid_side_on_fresh_id_is_malformed() {
    let mut book = OrderBook::new();

    let err = book
        .add_order(Order::new("1", "SecId1", "Hold", 100, "User1", "Company1"))
        .unwrap_err();
    assert!(err.is_malformed_input());
    assert!(!book.contains_order("1"));
}

#[test]
fn duplicate_id_is_rejected_and_original_kept() {
    let mut book = OrderBook::new();
    book.add_order(valid("1")).unwrap();

    let err = book
        .add_order(Order::new("1", "SecId9", "Sell", 9, "User9", "Company9"))
        .unwrap_err();
    assert!(matches!(err, OrderBookError::DuplicateOrderId(ref id) if id == "1"));

    let all = book.get_all_orders();
    assert_eq!(all, vec![valid("1")]);
}

#[test]
fn duplicate_check_spans_sides_and_securities() {
    let mut book = OrderBook::new();
    book.add_order(Order::new("X", "SecId1", "Sell", 10, "User1", "Company1"))
        .unwrap();

    let err = book
        .add_order(Order::new("X", "SecId2", "Buy", 10, "User2", "Company2"))
        .unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(book.order_count(), 1);
}
