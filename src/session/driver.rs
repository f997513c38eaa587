//! Session driver: consecutive games at one table.
//!
//! Each game:
//! 1. Every card returns to the deck, which is shuffled and dealt
//!    round-robin into the existing hands.
//! 2. If a previous game finished, its finish order drives the exchange.
//! 3. The last seat acts first and the engine plays the game out.
//! 4. Ranks are written back onto the participants.
//!
//! The session exclusively owns the participants and lends them to one
//! `RoundEngine` per game.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{deal, shuffled_deck, Hand};
use crate::core::{
    seat_participants, EngineError, EngineResult, GameRng, GameRngState, Participant, PlayerId,
    PlayerMap, SessionConfig,
};
use crate::rules::{play_round_robin, FinishOrder, GameRecord, LowestSufficient, PlayStrategy};

use super::standings::{assign_ranks, exchange, Swap};

/// Everything that happened in one game of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// 1-based game number within the session.
    pub number: u32,
    /// Hands straight after the deal, before the exchange.
    pub dealt: PlayerMap<Hand>,
    /// Swaps driven by the previous game's finish order.
    pub exchanges: Vec<Swap>,
    /// Hands the game was played with.
    pub opening: PlayerMap<Hand>,
    pub record: GameRecord,
}

/// A table of participants playing a series of games.
pub struct Session<S: PlayStrategy = LowestSufficient> {
    config: SessionConfig,
    participants: PlayerMap<Participant>,
    strategy: S,
    rng: GameRng,
    games_played: u32,
    last_finish: Option<FinishOrder>,
    total_skips: u32,
}

/// Serializable session state between games.
#[derive(Serialize, Deserialize)]
struct SessionSnapshot {
    config: SessionConfig,
    participants: PlayerMap<Participant>,
    rng: GameRngState,
    games_played: u32,
    last_finish: Option<FinishOrder>,
    total_skips: u32,
}

impl Session<LowestSufficient> {
    /// Session using the default weakest-sufficient strategy.
    pub fn new(config: SessionConfig) -> EngineResult<Self> {
        Self::with_strategy(config, LowestSufficient)
    }

    /// Resume a checkpoint with the default strategy.
    pub fn restore(bytes: &[u8]) -> EngineResult<Self> {
        Self::restore_with_strategy(bytes, LowestSufficient)
    }
}

impl<S: PlayStrategy> Session<S> {
    pub fn with_strategy(config: SessionConfig, strategy: S) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            participants: seat_participants(config.participant_count),
            rng: GameRng::new(config.seed),
            config,
            strategy,
            games_played: 0,
            last_finish: None,
            total_skips: 0,
        })
    }

    /// Resume a checkpoint, playing with `strategy`.
    pub fn restore_with_strategy(bytes: &[u8], strategy: S) -> EngineResult<Self> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        snapshot.config.validate()?;
        if snapshot.participants.player_count() != snapshot.config.participant_count {
            return Err(EngineError::configuration(format!(
                "checkpoint seats {} participants but is configured for {}",
                snapshot.participants.player_count(),
                snapshot.config.participant_count
            )));
        }
        if let Some(order) = &snapshot.last_finish {
            order.check_complete(snapshot.config.participant_count)?;
        }
        Ok(Self {
            config: snapshot.config,
            participants: snapshot.participants,
            strategy,
            rng: GameRng::from_state(&snapshot.rng),
            games_played: snapshot.games_played,
            last_finish: snapshot.last_finish,
            total_skips: snapshot.total_skips,
        })
    }

    /// Encode the session between games.
    pub fn checkpoint(&self) -> EngineResult<Vec<u8>> {
        let snapshot = SessionSnapshot {
            config: self.config.clone(),
            participants: self.participants.clone(),
            rng: self.rng.state(),
            games_played: self.games_played,
            last_finish: self.last_finish.clone(),
            total_skips: self.total_skips,
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        &self.participants
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Finish order of the most recent game.
    #[must_use]
    pub fn last_finish(&self) -> Option<&FinishOrder> {
        self.last_finish.as_ref()
    }

    /// Skip events across every game so far.
    #[must_use]
    pub fn total_skips(&self) -> u32 {
        self.total_skips
    }

    /// Seat that acts first in every game.
    #[must_use]
    pub fn starting_seat(&self) -> PlayerId {
        PlayerId::new((self.config.participant_count - 1) as u8)
    }

    /// Deal, exchange and play the next game.
    pub fn play_game(&mut self) -> EngineResult<GameReport> {
        let number = self.games_played + 1;
        let count = self.config.participant_count;

        // The deck's composition is fixed, so a fresh deck holds exactly
        // the cards collected back from the hands and the discard.
        let hands = deal(count, shuffled_deck(&mut self.rng))?;
        for (seat, participant) in self.participants.iter_mut() {
            participant.hand.take_all();
            participant.hand.add(hands[seat].cards().iter().copied());
            participant.rank = None;
        }

        let exchanges = match &self.last_finish {
            Some(order) => exchange(&mut self.participants, order)?,
            None => Vec::new(),
        };
        let opening = self.hands();

        let start = self.starting_seat();
        info!(game = number, participants = count, swaps = exchanges.len(), %start, "game starting");
        let record = play_round_robin(&mut self.participants, start, &self.strategy)?;

        for (seat, rank) in assign_ranks(&record.finish_order) {
            self.participants[seat].rank = Some(rank);
        }
        self.games_played = number;
        self.total_skips += record.skips;
        self.last_finish = Some(record.finish_order.clone());

        Ok(GameReport {
            number,
            dealt: hands,
            exchanges,
            opening,
            record,
        })
    }

    /// Play the remaining games of `games_per_session`.
    pub fn run(&mut self) -> EngineResult<Vec<GameReport>> {
        let remaining = self
            .config
            .games_per_session
            .saturating_sub(self.games_played);
        let mut reports = Vec::with_capacity(remaining as usize);
        for _ in 0..remaining {
            reports.push(self.play_game()?);
        }
        info!(
            games = self.games_played,
            skips = self.total_skips,
            "session complete"
        );
        Ok(reports)
    }

    fn hands(&self) -> PlayerMap<Hand> {
        PlayerMap::new(self.participants.player_count(), |seat| {
            self.participants[seat].hand.clone()
        })
    }
}
