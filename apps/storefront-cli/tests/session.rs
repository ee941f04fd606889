//! Scripted end-to-end sessions against the demo store.

use std::io::Cursor;

use storefront_cli::seed::build_store;
use storefront_cli::{ReceiptFormat, Session, SessionOutcome, ShellConfig};
use storefront_core::{CoreError, Money, OrderStatus, Store};

fn run_with(config: &ShellConfig, script: &str) -> (SessionOutcome, String, Store) {
    let mut store = build_store(config).unwrap();
    let mut output = Vec::new();
    let outcome = Session::new(&mut store, config, Cursor::new(script), &mut output)
        .run()
        .unwrap();
    (outcome, String::from_utf8(output).unwrap(), store)
}

fn run(script: &str) -> (SessionOutcome, String, Store) {
    run_with(&ShellConfig::default(), script)
}

fn admin_orders(store: &Store) -> usize {
    store
        .find_user("admin", "admin")
        .map(|u| u.purchase_history().len())
        .unwrap_or(0)
}

#[test]
fn test_wrong_password_ends_session() {
    let (outcome, out, store) = run("admin\nwrong\n1\n");

    assert!(matches!(outcome, SessionOutcome::AuthenticationFailed));
    assert!(out.contains("Invalid login or password."));
    assert!(!out.contains("Search for products:"));
    assert_eq!(admin_orders(&store), 0);
}

#[test]
fn test_category_search_without_order() {
    let (outcome, out, store) = run("admin\nadmin\n2\nelectronics\nno\n");

    assert!(matches!(outcome, SessionOutcome::Browsed));
    assert!(out.contains("Login successful!"));
    assert!(out.contains("0. Laptop - $1500.00 (Category: Electronics, Rating: 4.5)"));
    assert!(out.contains("1. Headphones - $100.00 (Category: Electronics, Rating: 4.7)"));
    assert!(out.contains("2. Smartphone - $800.00 (Category: Electronics, Rating: 4.6)"));
    assert!(!out.contains("Coffee Maker"));
    assert_eq!(admin_orders(&store), 0);
}

#[test]
fn test_price_search_with_no_matches() {
    let (_, out, _) = run("admin\nadmin\n1\n2000\n3000\nno\n");
    assert!(out.contains("No products found."));
}

#[test]
fn test_rating_search() {
    let (_, out, _) = run("admin\nadmin\n3\n4.6\nno\n");
    assert!(out.contains("0. Headphones"));
    assert!(out.contains("1. Smartphone"));
    assert!(!out.contains("Laptop"));
}

#[test]
fn test_full_order_flow() {
    // Headphones ($100) + Coffee Maker ($120), one bad token, quantity 3
    let (outcome, out, store) = run("admin\nadmin\n3\n4.0\nYes\n1, 3, x, 42\n3\n");

    match outcome {
        SessionOutcome::OrderPlaced(receipt) => {
            assert_eq!(receipt.total, Money::from_major_minor(660, 0));
            assert_eq!(receipt.status, OrderStatus::InProgress);
            assert_eq!(receipt.product_count, 2);
        }
        other => panic!("expected an order, got {:?}", other),
    }
    assert!(out.contains("Order created successfully."));
    assert!(out.contains("Order details: Total Price = $660.00, Status = In Progress"));
    assert_eq!(admin_orders(&store), 1);
}

#[test]
fn test_duplicate_indices_count_twice() {
    let (outcome, _, store) = run("admin\nadmin\n9\nyes\n1,1\n1\n");

    assert!(matches!(
        outcome,
        SessionOutcome::OrderPlaced(ref r) if r.total == Money::from_major_minor(200, 0)
    ));
    let history = store.find_user("admin", "admin").unwrap().purchase_history();
    assert_eq!(history[0].products.len(), 2);
}

#[test]
fn test_no_valid_indices() {
    let (outcome, out, store) = run("admin\nadmin\n9\nyes\n7,-1,abc\n");

    assert!(matches!(outcome, SessionOutcome::NothingSelected));
    assert!(out.contains("Invalid product indices. No products selected."));
    assert!(!out.contains("Enter quantity:"));
    assert_eq!(admin_orders(&store), 0);
}

#[test]
fn test_invalid_quantity() {
    for quantity in ["0", "-4", "lots"] {
        let script = format!("admin\nadmin\n9\nyes\n0\n{}\n", quantity);
        let (outcome, out, store) = run(&script);

        assert!(matches!(outcome, SessionOutcome::InvalidQuantity));
        assert!(out.contains("Invalid quantity."));
        assert_eq!(admin_orders(&store), 0);
    }
}

#[test]
fn test_overflowing_quantity_is_rejected_by_core() {
    let (outcome, out, store) = run("admin\nadmin\n9\nyes\n0\n9223372036854775807\n");

    assert!(matches!(
        outcome,
        SessionOutcome::OrderRejected(CoreError::TotalOverflow)
    ));
    assert!(out.contains("Order total overflows"));
    assert_eq!(admin_orders(&store), 0);
}

#[test]
fn test_json_receipt() {
    let config = ShellConfig {
        receipt_format: ReceiptFormat::Json,
        ..ShellConfig::default()
    };
    let (_, out, _) = run_with(&config, "admin\nadmin\n9\nyes\n0\n2\n");

    let json_start = out.find('{').unwrap();
    let json_end = out.rfind('}').unwrap();
    let receipt: serde_json::Value = serde_json::from_str(&out[json_start..=json_end]).unwrap();
    assert_eq!(receipt["total"], 300000);
    assert_eq!(receipt["status"], "In Progress");
    assert_eq!(receipt["quantity"], 2);
}

#[test]
fn test_banner_uses_store_name() {
    let config = ShellConfig {
        store_name: "Corner Shop".to_string(),
        ..ShellConfig::default()
    };
    let (_, out, _) = run_with(&config, "");
    assert!(out.starts_with("Welcome to Corner Shop!"));
}
