//! Session configuration.
//!
//! The deck composition is fixed (see `cards::deck`); only the table size,
//! the number of games and the shuffle seed are configurable.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Smallest supported table. Two seats would collapse the exchange rule.
pub const MIN_PARTICIPANTS: usize = 3;

/// Largest supported table.
pub const MAX_PARTICIPANTS: usize = 7;

/// Parameters for one session of consecutive games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of seats (3-7).
    pub participant_count: usize,

    /// Games played by `Session::run`. Must be positive.
    pub games_per_session: u32,

    /// Seed for every shuffle in the session.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            participant_count: 4,
            games_per_session: 3,
            seed: 42,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_participants(mut self, count: usize) -> Self {
        self.participant_count = count;
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games_per_session = games;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every option against its recognized range.
    pub fn validate(&self) -> EngineResult<()> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.participant_count) {
            return Err(EngineError::configuration(format!(
                "participant_count {} outside {}..={}",
                self.participant_count, MIN_PARTICIPANTS, MAX_PARTICIPANTS
            )));
        }
        if self.games_per_session == 0 {
            return Err(EngineError::configuration(
                "games_per_session must be positive",
            ));
        }
        Ok(())
    }
}
