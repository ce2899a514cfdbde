//! Cart state transitions and projections.
//!
//! [`CartStore`] owns the authoritative cart state and applies
//! [`CartInstruction`]s one at a time, handing out immutable
//! [`CartState`](trellis_types::CartState) snapshots. The [`projection`]
//! module derives read-only values (subtotals, the cart total, membership)
//! from a snapshot.
//!
//! [`CartInstruction`]: trellis_types::CartInstruction

pub mod projection;
mod store;

pub use store::{ApplyOutcome, CartStore, IgnoreReason};
