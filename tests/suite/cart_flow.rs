//! End-to-end shopping flows: catalog products through wire instructions to
//! totals.

use serde_json::json;

use trellis_catalog::Catalog;
use trellis_core::{CartStore, projection};
use trellis_types::{CartInstruction, ProductId};

fn apply_json(store: &mut CartStore, raw: serde_json::Value) {
    let instruction: CartInstruction = serde_json::from_value(raw).expect("valid instruction");
    let _ = store.apply(&instruction);
}

#[test]
fn a_full_shopping_session() {
    let catalog = Catalog::builtin();
    let mut store = CartStore::new();

    // Two snake plants, one rose, via the catalog's own drafts.
    let snake = catalog.get(ProductId::new(1)).unwrap();
    let rose = catalog.get(ProductId::new(7)).unwrap();
    let _ = store.apply(&CartInstruction::AddItem(snake.draft()));
    let _ = store.apply(&CartInstruction::AddItem(snake.draft()));
    let _ = store.apply(&CartInstruction::AddItem(rose.draft()));

    let state = store.state();
    assert_eq!(state.len(), 2);
    assert_eq!(state.get(ProductId::new(1)).unwrap().quantity().get(), 2);
    assert_eq!(state.get(ProductId::new(7)).unwrap().quantity().get(), 1);
    // 2 * 120 + 70
    assert!((store.total() - 310.0).abs() < 1e-9);

    // Shopper changes their mind about the rose.
    let _ = store.apply(&CartInstruction::RemoveItem {
        id: ProductId::new(7),
    });
    assert!((store.total() - 240.0).abs() < 1e-9);
    assert!(!projection::is_in_cart(&store.state(), ProductId::new(7)));
}

#[test]
fn decrement_drains_a_line_to_removal() {
    let catalog = Catalog::builtin();
    let mut store = CartStore::new();
    let aloe = catalog.get(ProductId::new(3)).unwrap();

    apply_json(
        &mut store,
        json!({ "type": "add-item", "id": 3, "name": aloe.name, "price": aloe.price, "quantity": 2 }),
    );
    apply_json(&mut store, json!({ "type": "decrement", "id": 3 }));
    assert_eq!(store.state().get(ProductId::new(3)).unwrap().quantity().get(), 1);

    apply_json(&mut store, json!({ "type": "decrement", "id": 3 }));
    assert!(store.state().is_empty());
    assert_eq!(store.total(), 0.0);

    // Further decrements are harmless no-ops.
    apply_json(&mut store, json!({ "type": "decrement", "id": 3 }));
    assert!(store.state().is_empty());
}

#[test]
fn malformed_numerics_degrade_instead_of_failing() {
    // Garbage price on create, garbage quantity on update.
    let mut store = CartStore::new();

    apply_json(
        &mut store,
        json!({ "type": "add-item", "id": 1, "name": "Mystery", "price": "abc" }),
    );
    let state = store.state();
    assert_eq!(state.get(ProductId::new(1)).unwrap().price().get(), 0.0);
    assert_eq!(state.get(ProductId::new(1)).unwrap().quantity().get(), 1);

    apply_json(
        &mut store,
        json!({ "type": "set-quantity", "id": 1, "quantity": "abc" }),
    );
    assert!(store.state().is_empty());
}

#[test]
fn totals_track_every_transition() {
    // A burst of instructions applied in arrival order.
    let mut store = CartStore::new();
    apply_json(
        &mut store,
        json!({ "type": "add-item", "id": 1, "price": 50, "quantity": 2 }),
    );
    apply_json(
        &mut store,
        json!({ "type": "add-item", "id": 2, "price": 10.5, "quantity": 1 }),
    );
    apply_json(&mut store, json!({ "type": "increment", "id": 1 }));
    apply_json(&mut store, json!({ "type": "set-quantity", "id": 2, "quantity": 4 }));

    let state = store.state();
    let expected: f64 = state
        .items()
        .iter()
        .map(|item| item.price().get() * f64::from(item.quantity().get()))
        .sum();
    assert!((store.total() - expected).abs() < 1e-9);
    assert!((store.total() - (150.0 + 42.0)).abs() < 1e-9);
    assert_eq!(store.version(), 4);
}

#[test]
fn snapshots_are_stable_across_later_edits() {
    let mut store = CartStore::new();
    apply_json(
        &mut store,
        json!({ "type": "add-item", "id": 1, "price": 100 }),
    );
    let before = store.state();

    apply_json(&mut store, json!({ "type": "increment", "id": 1 }));
    apply_json(&mut store, json!({ "type": "remove-item", "id": 1 }));

    assert_eq!(before.get(ProductId::new(1)).unwrap().quantity().get(), 1);
    assert!((projection::cart_total(&before) - 100.0).abs() < 1e-9);
    assert!(store.state().is_empty());
}
