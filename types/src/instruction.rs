use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::ProductId;

/// Product data carried by an `add-item` instruction.
///
/// Only the id is required; the other fields are copied into the line on
/// first insertion. `price` and `quantity` stay as raw JSON until the store
/// coerces them - presentation collaborators are not trusted to send clean
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl ProductDraft {
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            price: None,
            image: None,
            quantity: None,
        }
    }
}

/// A request to change the cart.
///
/// This is a real sum type: each wire shape of the instruction surface is
/// one variant with a fixed payload, so a payload missing its id fails at
/// the serde boundary instead of being shape-sniffed at apply time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CartInstruction {
    /// Merge a product into the cart (insert, or increase quantity).
    AddItem(ProductDraft),
    /// Replace a line's quantity outright; non-positive removes the line.
    SetQuantity { id: ProductId, quantity: Value },
    /// Increase a line's quantity by one.
    Increment { id: ProductId },
    /// Decrease a line's quantity by one, removing it at the floor.
    Decrement { id: ProductId },
    /// Delete a line. Idempotent.
    RemoveItem { id: ProductId },
}

impl CartInstruction {
    /// The id of the line this instruction addresses.
    #[must_use]
    pub fn target(&self) -> ProductId {
        match self {
            CartInstruction::AddItem(draft) => draft.id,
            CartInstruction::SetQuantity { id, .. }
            | CartInstruction::Increment { id }
            | CartInstruction::Decrement { id }
            | CartInstruction::RemoveItem { id } => *id,
        }
    }

    /// The wire tag, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CartInstruction::AddItem(_) => "add-item",
            CartInstruction::SetQuantity { .. } => "set-quantity",
            CartInstruction::Increment { .. } => "increment",
            CartInstruction::Decrement { .. } => "decrement",
            CartInstruction::RemoveItem { .. } => "remove-item",
        }
    }
}
