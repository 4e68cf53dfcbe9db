//! Match orchestration: turn order, round resolution, termination, and the
//! card-conservation invariant.
//!
//! ## Round shape
//!
//! One call to [`Match::resolve_round`] compares the two visible cards on the
//! chosen attribute, moves the loser's visible card into the winner's hand at
//! a random index, then pops and reinserts the winner's current visible card
//! at a random index as well. Both played cards are appended to the shared
//! history, the conservation check runs, and either the match finishes (loser
//! emptied out) or the turn alternates.
//!
//! The winner's own reinsertion looks redundant but is a rule of the game: it
//! keeps the top of the winning hand unpredictable no matter who won the
//! round.
//!
//! ## Tie-break
//!
//! The comparison is strict `>` for the active seat: on equal values the
//! active player loses the round. This asymmetry is load-bearing and pinned
//! down by tests.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{deal, standard_pool, Attribute, Card, CardId};
use crate::core::{EngineError, GameRng, Result};
use crate::player::Player;
use crate::policy::{choose_heuristic, choose_random, RobotMode};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Seat A (deals first, acts first).
    pub const A: PlayerId = PlayerId(0);
    /// Seat B.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// How the match is set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans alternating at the same machine.
    PvP,
    /// Human vs a robot that picks attributes uniformly.
    RobotRandom,
    /// Human vs a robot that plays the median heuristic.
    RobotHeuristic,
}

/// Outcome record of the most recent round, for external reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Attribute the round was decided on.
    pub attribute: Attribute,
    /// The active seat's value on that attribute.
    pub active_value: u32,
    /// The passive seat's value on that attribute.
    pub passive_value: u32,
    /// Seat that won the round.
    pub winner: PlayerId,
    /// Display name of the round winner.
    pub winner_name: String,
}

/// Builder for a [`Match`].
///
/// ```
/// use nature_duel::engine::{MatchBuilder, Mode};
///
/// let game = MatchBuilder::new(Mode::RobotHeuristic)
///     .human_name("Ada")
///     .build(42);
///
/// assert_eq!(game.active_player().name(), "Ada");
/// assert!(!game.finished());
/// ```
pub struct MatchBuilder {
    mode: Mode,
    human_name: String,
    pool: Option<Vec<Card>>,
    hands: Option<(Vec<Card>, Vec<Card>)>,
}

impl MatchBuilder {
    /// Start building a match in the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            human_name: String::new(),
            pool: None,
            hands: None,
        }
    }

    /// Display name for the human seat in robot modes; ignored in PvP.
    ///
    /// Whitespace-only names fall back to "Human".
    #[must_use]
    pub fn human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Replace the standard pool with a custom one.
    ///
    /// Ids must be unique within the pool; the conservation invariant tracks
    /// them for the rest of the match.
    #[must_use]
    pub fn pool(mut self, cards: Vec<Card>) -> Self {
        self.pool = Some(cards);
        self
    }

    /// Skip the shuffle and deal these exact hands (bottom-to-top order).
    ///
    /// Intended for scripted setups and tests; normal play lets `build` deal
    /// a shuffled pool.
    #[must_use]
    pub fn hands(mut self, seat_a: Vec<Card>, seat_b: Vec<Card>) -> Self {
        self.hands = Some((seat_a, seat_b));
        self
    }

    /// Deal the pool and produce the initial match state.
    ///
    /// Seat A is active first.
    #[must_use]
    pub fn build(self, seed: u64) -> Match {
        let mut rng = GameRng::new(seed);

        let (first, second) = match self.hands {
            Some(hands) => hands,
            None => deal(self.pool.unwrap_or_else(standard_pool), &mut rng),
        };

        let initial_count = first.len() + second.len();
        let initial_ids: FxHashSet<CardId> =
            first.iter().chain(second.iter()).map(|c| c.id).collect();

        let trimmed = self.human_name.trim();
        let human = if trimmed.is_empty() { "Human" } else { trimmed };

        let (players, robot) = match self.mode {
            Mode::PvP => (
                [
                    Player::new("Player 1", first),
                    Player::new("Player 2", second),
                ],
                None,
            ),
            Mode::RobotRandom => (
                [Player::new(human, first), Player::new("Robot", second)],
                Some((PlayerId::B, RobotMode::Random)),
            ),
            Mode::RobotHeuristic => (
                [Player::new(human, first), Player::new("Robot", second)],
                Some((PlayerId::B, RobotMode::Heuristic)),
            ),
        };

        Match {
            mode: self.mode,
            players,
            active: PlayerId::A,
            robot,
            history: Vec::new(),
            initial_ids,
            initial_count,
            finished: false,
            winner: None,
            last_round: None,
            rng,
        }
    }
}

/// A complete two-player match.
///
/// Owns both hands, the shared played-card history, and the RNG for the whole
/// match. The presentation layer must treat everything it reads back as
/// read-only.
pub struct Match {
    mode: Mode,
    players: [Player; 2],
    active: PlayerId,
    /// Robot seat and its policy, if any.
    robot: Option<(PlayerId, RobotMode)>,
    /// Every card played so far, in play order. Only grows.
    history: Vec<Card>,
    /// Card identities at the deal; the conservation check compares against
    /// these after every round.
    initial_ids: FxHashSet<CardId>,
    initial_count: usize,
    finished: bool,
    winner: Option<PlayerId>,
    last_round: Option<RoundSummary>,
    rng: GameRng,
}

impl Match {
    /// Shorthand for `MatchBuilder::new(mode).human_name(name).build(seed)`.
    #[must_use]
    pub fn new(mode: Mode, human_name: &str, seed: u64) -> Self {
        MatchBuilder::new(mode).human_name(human_name).build(seed)
    }

    // === Accessors ===

    /// The match mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seat whose turn it is to choose the attribute.
    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        self.active
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// The opponent of the active player.
    #[must_use]
    pub fn passive_player(&self) -> &Player {
        &self.players[self.active.other().index()]
    }

    /// Player at the given seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Hand sizes as (seat A, seat B).
    #[must_use]
    pub fn hand_sizes(&self) -> (usize, usize) {
        (self.players[0].hand_size(), self.players[1].hand_size())
    }

    /// True once one player has run out of cards.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The match winner, once `finished` is true.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|id| &self.players[id.index()])
    }

    /// Summary of the most recent round, if any round has been played.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Every card played so far, in play order.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// True when the current turn belongs to the robot seat.
    #[must_use]
    pub fn is_active_robot(&self) -> bool {
        matches!(self.robot, Some((seat, _)) if seat == self.active)
    }

    // === Decisions ===

    /// Ask the active robot for an attribute choice.
    ///
    /// Rejected with `InvalidMove` when the match is finished or the active
    /// seat is human; the engine state is untouched either way.
    pub fn choose_robot_attribute(&mut self) -> Result<Attribute> {
        if self.finished {
            return Err(EngineError::InvalidMove {
                reason: "match is already finished".to_string(),
            });
        }

        let mode = match self.robot {
            Some((seat, mode)) if seat == self.active => mode,
            _ => {
                return Err(EngineError::InvalidMove {
                    reason: "active player is not a robot".to_string(),
                })
            }
        };

        let card = self.players[self.active.index()].visible_card()?.clone();
        match mode {
            RobotMode::Random => Ok(choose_random(&mut self.rng)),
            RobotMode::Heuristic => Ok(choose_heuristic(&card, &self.history, &mut self.rng)),
        }
    }

    /// Resolve one round on the given attribute.
    ///
    /// The active seat wins only on a strictly greater value; a tie loses the
    /// round for the active seat. The loser's visible card moves into the
    /// winner's hand at a random index, then the winner's current visible
    /// card is popped and reinserted at a random index of its own. The turn
    /// alternates unless the loser just ran out of cards, in which case the
    /// match finishes and the round winner becomes the match winner.
    ///
    /// Returns the round summary, also readable later via
    /// [`Match::last_round`].
    pub fn resolve_round(&mut self, attribute: Attribute) -> Result<RoundSummary> {
        if self.finished {
            return Err(EngineError::InvalidMove {
                reason: "match is already finished".to_string(),
            });
        }

        let active = self.active;
        let passive = active.other();

        // Snapshots of both played cards, before anything moves.
        let active_card = self.players[active.index()].visible_card()?.clone();
        let passive_card = self.players[passive.index()].visible_card()?.clone();

        let active_value = active_card.value(attribute);
        let passive_value = passive_card.value(attribute);

        // Strict >: on a tie the active seat loses.
        let (winner, loser) = if active_value > passive_value {
            (active, passive)
        } else {
            (passive, active)
        };

        // Transfer the loser's card into the winner's hand at a random index.
        let transferred = self.players[loser.index()].remove_top()?;
        self.players[winner.index()].add_card(transferred, &mut self.rng);

        // The winner's current visible card (which may or may not be the one
        // just transferred) also goes back at a random index.
        let replayed = self.players[winner.index()].remove_top()?;
        self.players[winner.index()].add_card(replayed, &mut self.rng);

        self.history.push(active_card);
        self.history.push(passive_card);

        self.check_invariants()?;

        let summary = RoundSummary {
            attribute,
            active_value,
            passive_value,
            winner,
            winner_name: self.players[winner.index()].name().to_string(),
        };
        self.last_round = Some(summary.clone());

        if self.players[loser.index()].is_defeated() {
            self.finished = true;
            self.winner = Some(winner);
        } else {
            self.active = passive;
        }

        Ok(summary)
    }

    /// Conservation check: the card-id multiset across both hands must equal
    /// the multiset at the deal.
    fn check_invariants(&self) -> Result<()> {
        let total: usize = self.players.iter().map(Player::hand_size).sum();
        if total != self.initial_count {
            return Err(EngineError::InvariantViolation {
                detail: format!(
                    "expected {} cards in play, found {}",
                    self.initial_count, total
                ),
            });
        }

        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for player in &self.players {
            for card in player.cards() {
                if !seen.insert(card.id) {
                    return Err(EngineError::InvariantViolation {
                        detail: format!("{} held in more than one position", card.id),
                    });
                }
            }
        }

        if seen != self.initial_ids {
            return Err(EngineError::InvariantViolation {
                detail: "card set differs from the initial pool".to_string(),
            });
        }

        Ok(())
    }
}
