use std::sync::Arc;

use tracing::{debug, warn};

use trellis_types::{
    CartInstruction, CartState, LineItem, ProductDraft, ProductId, Quantity, to_finite_f64,
};

use crate::projection;

/// Why an instruction degenerated to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The instruction addressed an id with no line in the cart. The store
    /// never invents a line from a bare id.
    UnknownLine(ProductId),
}

/// Result of applying one instruction.
///
/// Applying is total - malformed input degrades to coercion defaults or a
/// no-op, never an error - but callers can observe whether the state
/// actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ApplyOutcome {
    /// A new snapshot was committed; the version counter advanced.
    Committed,
    /// The instruction had no effect; the snapshot and version are unchanged.
    Ignored(IgnoreReason),
}

impl ApplyOutcome {
    #[must_use]
    pub fn is_committed(self) -> bool {
        matches!(self, ApplyOutcome::Committed)
    }
}

/// Single owner of the cart state.
///
/// Instructions are applied through `&mut self`, so each one sees the latest
/// snapshot and bursts are serialized in arrival order by construction - two
/// instructions can never both commit against the same stale snapshot.
/// Consumers hold `Arc<CartState>` snapshots that later transitions never
/// touch.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: Arc<CartState>,
    version: u64,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// An empty cart at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(CartState::empty()),
            version: 0,
        }
    }

    /// The current snapshot. Cheap to clone and safe to hold across later
    /// transitions.
    #[must_use]
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    /// Monotonic counter, advanced exactly once per committed transition.
    /// Suitable as a memoization key for derived values.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sum of all line subtotals in the current snapshot.
    #[must_use]
    pub fn total(&self) -> f64 {
        projection::cart_total(&self.state)
    }

    /// Subtotal of the line for `id`, or 0 when the id is not in the cart.
    #[must_use]
    pub fn line_subtotal(&self, id: ProductId) -> f64 {
        self.state.get(id).map_or(0.0, projection::line_subtotal)
    }

    /// Apply one instruction to the latest snapshot.
    pub fn apply(&mut self, instruction: &CartInstruction) -> ApplyOutcome {
        let outcome = match instruction {
            CartInstruction::AddItem(draft) => self.add_item(draft),
            CartInstruction::SetQuantity { id, quantity } => self.set_quantity(*id, quantity),
            CartInstruction::Increment { id } => self.adjust(*id, Adjust::Up),
            CartInstruction::Decrement { id } => self.adjust(*id, Adjust::Down),
            CartInstruction::RemoveItem { id } => self.remove_item(*id),
        };
        match outcome {
            ApplyOutcome::Committed => {
                debug!(
                    kind = instruction.kind(),
                    id = %instruction.target(),
                    version = self.version,
                    lines = self.state.len(),
                    "cart transition committed"
                );
            }
            ApplyOutcome::Ignored(reason) => {
                debug!(
                    kind = instruction.kind(),
                    id = %instruction.target(),
                    ?reason,
                    "cart instruction ignored"
                );
            }
        }
        outcome
    }

    fn commit(&mut self, next: CartState) -> ApplyOutcome {
        self.state = Arc::new(next);
        self.version += 1;
        ApplyOutcome::Committed
    }

    fn add_item(&mut self, draft: &ProductDraft) -> ApplyOutcome {
        warn_on_unparseable(draft);
        let next = match self.state.get(draft.id) {
            Some(existing) => {
                let amount = Quantity::coerce_add(draft.quantity.as_ref());
                let merged = existing.with_quantity(existing.quantity().saturating_add(amount.get()));
                self.state.with_item(merged)
            }
            None => self.state.with_item(LineItem::from_draft(draft)),
        };
        self.commit(next)
    }

    fn set_quantity(&mut self, id: ProductId, quantity: &serde_json::Value) -> ApplyOutcome {
        let Some(existing) = self.state.get(id) else {
            return ApplyOutcome::Ignored(IgnoreReason::UnknownLine(id));
        };
        match Quantity::coerce_set(quantity) {
            Some(next_quantity) => {
                let updated = existing.with_quantity(next_quantity);
                let next = self.state.with_item(updated);
                self.commit(next)
            }
            None => {
                if to_finite_f64(quantity).is_none() {
                    warn!(%id, value = %quantity, "unparseable quantity, removing line");
                }
                let next = self.state.without_item(id);
                self.commit(next)
            }
        }
    }

    fn adjust(&mut self, id: ProductId, direction: Adjust) -> ApplyOutcome {
        let Some(existing) = self.state.get(id) else {
            return ApplyOutcome::Ignored(IgnoreReason::UnknownLine(id));
        };
        let next = match direction {
            Adjust::Up => {
                let bumped = existing.with_quantity(existing.quantity().saturating_add(1));
                self.state.with_item(bumped)
            }
            Adjust::Down => match existing.quantity().decremented() {
                Some(lowered) => self.state.with_item(existing.with_quantity(lowered)),
                // Quantity floor reached: the line goes away entirely.
                None => self.state.without_item(id),
            },
        };
        self.commit(next)
    }

    fn remove_item(&mut self, id: ProductId) -> ApplyOutcome {
        if !self.state.contains(id) {
            return ApplyOutcome::Ignored(IgnoreReason::UnknownLine(id));
        }
        let next = self.state.without_item(id);
        self.commit(next)
    }
}

#[derive(Debug, Clone, Copy)]
enum Adjust {
    Up,
    Down,
}

fn warn_on_unparseable(draft: &ProductDraft) {
    if let Some(price) = &draft.price
        && to_finite_f64(price).is_none()
    {
        warn!(id = %draft.id, value = %price, "unparseable price, coercing to 0");
    }
    if let Some(quantity) = &draft.quantity
        && to_finite_f64(quantity).is_none()
    {
        warn!(id = %draft.id, value = %quantity, "unparseable quantity, coercing to 1");
    }
}
