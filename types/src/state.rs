use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::item::LineItem;

/// The complete cart at a point in time: an ordered sequence of lines,
/// keyed by product id.
///
/// `CartState` is a value type. The store never mutates a snapshot a
/// consumer may hold; transitions build a new state with [`with_item`] /
/// [`without_item`], which preserve insertion order and id uniqueness.
///
/// [`with_item`]: CartState::with_item
/// [`without_item`]: CartState::without_item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A new state with `item` inserted, replacing any existing line with
    /// the same id in place (insertion order is stable).
    #[must_use]
    pub fn with_item(&self, item: LineItem) -> Self {
        let mut items = self.items.clone();
        match items.iter().position(|it| it.id() == item.id()) {
            Some(index) => items[index] = item,
            None => items.push(item),
        }
        Self { items }
    }

    /// A new state without the line for `id`; identical if the id is absent.
    #[must_use]
    pub fn without_item(&self, id: ProductId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        }
    }
}
