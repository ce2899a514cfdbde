//! Wire-shape checks for the instruction surface.

use serde_json::json;

use trellis_types::{CartInstruction, ProductDraft, ProductId};

#[test]
fn every_tag_round_trips() {
    let instructions = vec![
        CartInstruction::AddItem(ProductDraft {
            id: ProductId::new(1),
            name: Some("Snake Plant".to_string()),
            price: Some(json!(120.0)),
            image: Some("/images/snake.jpg".to_string()),
            quantity: Some(json!(2)),
        }),
        CartInstruction::SetQuantity {
            id: ProductId::new(1),
            quantity: json!(3),
        },
        CartInstruction::Increment {
            id: ProductId::new(1),
        },
        CartInstruction::Decrement {
            id: ProductId::new(1),
        },
        CartInstruction::RemoveItem {
            id: ProductId::new(1),
        },
    ];
    for instruction in instructions {
        let encoded = serde_json::to_value(&instruction).unwrap();
        assert_eq!(encoded["type"], json!(instruction.kind()));
        let decoded: CartInstruction = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, instruction);
    }
}

#[test]
fn minimal_add_item_payload_needs_only_an_id() {
    let decoded: CartInstruction =
        serde_json::from_value(json!({ "type": "add-item", "id": 4 })).unwrap();
    let CartInstruction::AddItem(draft) = decoded else {
        panic!("expected add-item");
    };
    assert_eq!(draft, ProductDraft::new(ProductId::new(4)));
}

#[test]
fn payloads_without_an_id_fail_to_decode() {
    for tag in ["add-item", "set-quantity", "increment", "decrement", "remove-item"] {
        let raw = json!({ "type": tag, "quantity": 1 });
        assert!(
            serde_json::from_value::<CartInstruction>(raw).is_err(),
            "{tag} without id must be rejected"
        );
    }
}
