//! Action effects and move resolution.
//!
//! Effects are plain data attached to action cards. The resolver is the only
//! code that turns a `Move` into state changes.

pub mod effect;
pub mod resolver;

pub use effect::{ActionEffect, BasicEffect, PlayMoves, TransformEffect};
pub use resolver::{MoveContext, MoveResolver};
