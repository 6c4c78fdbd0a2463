//! Card catalog: definitions, registry, and the standard set.
//!
//! ## Key Types
//!
//! - `CardId`: Index of a card type in its registry
//! - `Card`: Immutable cost/gold/victory values plus an optional effect
//! - `CardKind`: Action, Treasure or Victory
//! - `CardRegistry`: Name and ID lookup; `CardRegistry::standard()` is the
//!   shared, read-only catalog

pub mod definition;
pub mod registry;
pub mod standard;

pub use definition::{Card, CardId, CardKind};
pub use registry::CardRegistry;
