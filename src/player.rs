//! A player's hand: a stack with randomized insertion.
//!
//! The visible card is the last element. The only mutations are popping the
//! top and inserting at a uniformly random index, so nobody can track the
//! exact order of a hand after a transfer. The engine owns both players for
//! the lifetime of a match.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{EngineError, GameRng, Result};

/// Hands never exceed the pool size (16 in the standard pool); keep them
/// inline.
pub type Hand = SmallVec<[Card; 16]>;

/// One seat at the table: a display name and an ordered hand.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Create a player holding the given cards, bottom-to-top.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand: cards.into_iter().collect(),
        }
    }

    /// The card this player currently exposes to the opponent.
    ///
    /// `EmptyHand` should be unreachable mid-match given the termination
    /// rule, but is guarded regardless.
    pub fn visible_card(&self) -> Result<&Card> {
        self.hand.last().ok_or_else(|| EngineError::EmptyHand {
            player: self.name.clone(),
        })
    }

    /// Pop and return the visible card.
    pub fn remove_top(&mut self) -> Result<Card> {
        self.hand.pop().ok_or_else(|| EngineError::EmptyHand {
            player: self.name.clone(),
        })
    }

    /// Insert a card at a uniformly random index in `0..=len`.
    ///
    /// Both ends are included: the new card may become the visible card
    /// immediately or sink to the bottom, so its future visibility is
    /// unpredictable.
    pub fn add_card(&mut self, card: Card, rng: &mut GameRng) {
        let index = rng.gen_index_inclusive(self.hand.len());
        self.hand.insert(index, card);
    }

    /// True once the hand is empty.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hand.is_empty()
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate the hand bottom-to-top. Used by the conservation check.
    pub(crate) fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }
}
