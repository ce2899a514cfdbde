//! Read-only derivations over a cart snapshot.
//!
//! Pure functions, no mutation, no side effects. Totals are recomputed from
//! state on every call; callers that need caching can memoize on
//! [`CartStore::version`](crate::CartStore::version).

use trellis_types::{CartState, LineItem, ProductId};

/// `price * quantity` for one line, unrounded.
#[must_use]
pub fn line_subtotal(item: &LineItem) -> f64 {
    item.price().get() * f64::from(item.quantity().get())
}

/// Sum of all line subtotals; 0 for an empty cart.
///
/// The store normalizes prices and quantities on every write, but totals are
/// also consumed against snapshots deserialized from external writers, so a
/// non-finite contribution is treated as 0 rather than poisoning the sum.
#[must_use]
pub fn cart_total(state: &CartState) -> f64 {
    state
        .items()
        .iter()
        .map(line_subtotal)
        .filter(|subtotal| subtotal.is_finite())
        .fold(0.0, |total, subtotal| total + subtotal)
}

/// Whether the cart has a line for `id`.
#[must_use]
pub fn is_in_cart(state: &CartState, id: ProductId) -> bool {
    state.contains(id)
}

/// Round to currency precision (2 decimal places). Presentation-time only;
/// stored state is never rounded.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
