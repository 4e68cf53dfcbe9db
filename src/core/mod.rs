//! Engine plumbing: deterministic RNG and the error taxonomy.

pub mod error;
pub mod rng;

pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
