//! # rust-scum
//!
//! Rule engine for a president/scum-family shedding game with wild cards,
//! rank-match skips and a reversing 7.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Given the same seed every deal, play and finish
//!    order is reproduced exactly. Sessions can be checkpointed and resumed.
//!
//! 2. **Events, not text**: The engine reports each turn as a structured
//!    `TurnEvent`. Rendering is left to the caller.
//!
//! 3. **Swappable play selection**: `RoundEngine` only asks a
//!    `PlayStrategy` what to play; it owns every other rule.
//!
//! ## Variant rules
//!
//! The opening restriction (no 2s or Jokers to open) is re-armed at every
//! round boundary, not only at the start of a game. After a round ends,
//! play continues from wherever that turn's seat advancement landed, which
//! is not always the round winner.
//!
//! ## Modules
//!
//! - `core`: Seats, participants, RNG, configuration, errors
//! - `cards`: Ranks, groups, hands, the 54-card deck
//! - `rules`: Table state, play strategies, the round engine
//! - `session`: Ranks, the exchange, and the multi-game driver

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameRng, GameRngState, Participant, PlayerId, PlayerMap,
    SessionConfig,
};

pub use crate::cards::{deal, shuffled_deck, standard_deck, Group, Hand, Rank, DECK_SIZE};

pub use crate::rules::{
    play_round_robin, FinishOrder, GameRecord, LowestSufficient, PlayStrategy, RoundEnd,
    RoundEngine, RoundState, TableState, TurnAction, TurnEvent,
};

pub use crate::session::{assign_ranks, exchange, GameReport, Session, Swap};
