//! Core engine types: seats, participants, RNG, configuration, errors.
//!
//! Nothing in here knows the rules of the game; `cards` and `rules`
//! build on these.

pub mod config;
pub mod error;
pub mod participant;
pub mod player;
pub mod rng;

pub use config::{SessionConfig, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use error::{EngineError, EngineResult};
pub use participant::{seat_participants, Participant};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
