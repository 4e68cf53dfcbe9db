//! Card model and the standard pool.
//!
//! ## Key Types
//!
//! - `Attribute`: the three comparable attributes, in fixed order
//! - `CardId`: per-instance identity (two cards may share every value)
//! - `Card`: immutable name + attribute values
//!
//! `pool` supplies the standard 16-animal pool and the one-shot deal that
//! splits a pool into the two starting hands.

pub mod card;
pub mod pool;

pub use card::{Attribute, Card, CardId};
pub use pool::{deal, standard_pool};
