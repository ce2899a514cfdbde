use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::coerce::to_finite_f64;
use crate::ids::ProductId;
use crate::instruction::ProductDraft;

// ============================================================================
// Quantity
// ============================================================================

/// A line quantity guaranteed to be at least 1.
///
/// The cart's quantity floor is encoded here rather than checked at use
/// sites: [`Quantity::decremented`] returns `None` when the floor is
/// reached, so the caller must decide to remove the line - it cannot store
/// a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

#[derive(Debug, Error)]
#[error("quantity must be at least 1")]
pub struct QuantityError;

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            Err(QuantityError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn saturating_add(self, amount: u32) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// One less, or `None` at the floor of 1.
    #[must_use]
    pub fn decremented(self) -> Option<Self> {
        Self::new(self.0 - 1).ok()
    }

    /// Coerce an untrusted add amount (the optional `quantity` field of an
    /// `add-item` payload).
    ///
    /// Missing or unparseable values default to 1; parsed values are
    /// truncated to an integer and floored at 1. An add amount is therefore
    /// always positive - adding to the cart never shrinks a line.
    #[must_use]
    pub fn coerce_add(raw: Option<&Value>) -> Self {
        let Some(value) = raw else {
            return Self::ONE;
        };
        match to_finite_f64(value) {
            Some(n) if n >= 1.0 => Self(clamp_to_u32(n)),
            _ => Self::ONE,
        }
    }

    /// Coerce an untrusted absolute quantity (the `quantity` field of a
    /// `set-quantity` payload).
    ///
    /// Unparseable or non-positive values yield `None`: the line must be
    /// removed, never stored at or below zero.
    #[must_use]
    pub fn coerce_set(raw: &Value) -> Option<Self> {
        match to_finite_f64(raw) {
            Some(n) if n >= 1.0 => Some(Self(clamp_to_u32(n))),
            _ => None,
        }
    }
}

fn clamp_to_u32(n: f64) -> u32 {
    // Caller has already established n >= 1.0 and finite.
    if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n as u32
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// UnitPrice
// ============================================================================

/// A unit price guaranteed to be finite and non-negative.
///
/// Construction clamps rather than errors: a negative or non-finite input
/// becomes zero, matching the coercion policy for untrusted price fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub const ZERO: UnitPrice = UnitPrice(0.0);

    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Coerce an untrusted price field; missing or unparseable values
    /// default to zero.
    #[must_use]
    pub fn coerce(raw: Option<&Value>) -> Self {
        raw.and_then(to_finite_f64).map_or(Self::ZERO, Self::new)
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for UnitPrice {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitPrice> for f64 {
    fn from(value: UnitPrice) -> Self {
        value.0
    }
}

// ============================================================================
// LineItem
// ============================================================================

/// One product's presence in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    price: UnitPrice,
    quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl LineItem {
    #[must_use]
    pub fn new(id: ProductId, price: UnitPrice, quantity: Quantity) -> Self {
        Self {
            id,
            name: None,
            price,
            quantity,
            image: None,
        }
    }

    /// Build the initial line for a product draft, coercing the untrusted
    /// price and quantity fields.
    #[must_use]
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            id: draft.id,
            name: draft.name.clone(),
            price: UnitPrice::coerce(draft.price.as_ref()),
            quantity: Quantity::coerce_add(draft.quantity.as_ref()),
            image: draft.image.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display label, falling back to a placeholder for unnamed items.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed item")
    }

    #[must_use]
    pub fn price(&self) -> UnitPrice {
        self.price
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The same line with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
