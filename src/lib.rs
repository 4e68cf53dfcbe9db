//! # nature-duel
//!
//! Engine for a two-player "war"-style card game: every card carries three
//! numeric attributes, players alternately expose their top card and pick an
//! attribute (or have a robot pick one), and the strictly higher value wins
//! both cards.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: the engine never renders anything. A presentation
//!    layer calls [`Match::resolve_round`] once per decision and reads state
//!    back through accessors.
//!
//! 2. **Deterministic**: every source of randomness (deck shuffle, hand
//!    insertion, random robot choice) flows through a single seeded
//!    [`GameRng`], so a fixed seed replays an entire match exactly.
//!
//! 3. **Conservation**: no card is created, destroyed, or duplicated after
//!    the deal. The engine re-checks this after every round and reports a
//!    fatal [`EngineError::InvariantViolation`] if bookkeeping ever breaks.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG and the error taxonomy
//! - `cards`: attribute/card model and the standard pool
//! - `player`: a hand stack with randomized insertion
//! - `policy`: robot decision policies (random, median heuristic)
//! - `engine`: match orchestration and round resolution

pub mod cards;
pub mod core;
pub mod engine;
pub mod player;
pub mod policy;

// Re-export commonly used types
pub use crate::cards::{standard_pool, Attribute, Card, CardId};
pub use crate::core::{EngineError, GameRng, GameRngState, Result};
pub use crate::engine::{Match, MatchBuilder, Mode, PlayerId, RoundSummary};
pub use crate::player::Player;
pub use crate::policy::{choose_heuristic, choose_random, RobotMode};
