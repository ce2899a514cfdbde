//! Core domain types for Trellis.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.
//!
//! The invariants the cart relies on are encoded in the types themselves:
//! [`Quantity`] cannot be zero, [`UnitPrice`] cannot be negative or
//! non-finite, and [`CartState`] cannot hold two lines with the same id.

mod coerce;
mod ids;
mod instruction;
mod item;
mod state;

pub use coerce::to_finite_f64;
pub use ids::ProductId;
pub use instruction::{CartInstruction, ProductDraft};
pub use item::{LineItem, Quantity, QuantityError, UnitPrice};
pub use state::CartState;
