//! Round engine: the turn-by-turn state machine for one game.
//!
//! Each `step` asks the active seat's strategy for a play, commits it (or
//! records a pass), advances the seat pointer, and checks whether the
//! round is over. The game is over once every seat is in the finish order.
//!
//! ## Turn rules
//!
//! - A play whose rank matches the table's leading rank skips the next
//!   seat (advance by 2 instead of 1).
//! - A round ends when `participant_count - 1` consecutive passes have
//!   been made, or a 2/Joker leads the table.
//! - A round end clears the table and re-arms the opening restriction.
//!   The seat pointer is left where that turn's advancement put it; it is
//!   not moved to the round winner.
//! - A round that ends without any play lifts the restriction for the
//!   next opening, so hands holding only 2s and Jokers can still lead.
//! - Seats that are out of cards stay in rotation and pass without
//!   consulting the strategy. Their passes count like any other.
//! - Once all but one seat have finished, the last seat is appended to
//!   the finish order without playing further.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::cards::Rank;
use crate::core::{EngineError, EngineResult, Participant, PlayerId, PlayerMap};

use super::event::{RoundEnd, TurnAction, TurnEvent};
use super::finish::FinishOrder;
use super::strategy::PlayStrategy;
use super::table::{RoundState, TableState};

/// Outcome of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub finish_order: FinishOrder,
    /// Every committed turn, in order.
    pub events: Vector<TurnEvent>,
    /// Rank-match skip events.
    pub skips: u32,
    /// Completed rounds.
    pub rounds: u32,
}

impl GameRecord {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.events.len()
    }
}

/// Drives one game over a borrowed table of participants.
///
/// The engine keeps no state between games; build a new one per game.
pub struct RoundEngine<'a, S: PlayStrategy + ?Sized> {
    participants: &'a mut PlayerMap<Participant>,
    strategy: &'a S,
    round: RoundState,
    finish: FinishOrder,
    /// Cards played this game that are no longer on the table.
    discard: Vec<Rank>,
    events: Vector<TurnEvent>,
    skips: u32,
    rounds: u32,
    /// Consecutive rounds that ended without a play.
    empty_rounds: u32,
}

impl<'a, S: PlayStrategy + ?Sized> RoundEngine<'a, S> {
    /// Start a game with `starting_seat` to act first.
    ///
    /// Seats that already hold no cards are entered in the finish order
    /// in seat order.
    pub fn new(
        participants: &'a mut PlayerMap<Participant>,
        strategy: &'a S,
        starting_seat: PlayerId,
    ) -> EngineResult<Self> {
        let count = participants.player_count();
        if count < 2 {
            return Err(EngineError::configuration(format!(
                "a game needs at least 2 seats, got {count}"
            )));
        }
        if starting_seat.index() >= count {
            return Err(EngineError::configuration(format!(
                "starting {starting_seat} outside a table of {count}"
            )));
        }

        let mut finish = FinishOrder::new();
        for (seat, participant) in participants.iter() {
            if participant.is_out() {
                finish.push(seat);
            }
        }

        let mut engine = Self {
            participants,
            strategy,
            round: RoundState::opening(starting_seat),
            finish,
            discard: Vec::new(),
            events: Vector::new(),
            skips: 0,
            rounds: 0,
            empty_rounds: 0,
        };
        engine.settle_last_seat();
        Ok(engine)
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.player_count()
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        self.participants
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.round.table
    }

    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        self.round.active_seat
    }

    #[must_use]
    pub fn finish_order(&self) -> &FinishOrder {
        &self.finish
    }

    #[must_use]
    pub fn skip_count(&self) -> u32 {
        self.skips
    }

    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn events(&self) -> &Vector<TurnEvent> {
        &self.events
    }

    /// Cards that left a hand this game: the discard plus the table.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.discard.len() + self.round.table.group_size().unwrap_or(0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finish.len() == self.participant_count()
    }

    /// Play one turn for the active seat.
    pub fn step(&mut self) -> EngineResult<TurnEvent> {
        if self.is_finished() {
            return Err(EngineError::illegal_state("step called on a finished game"));
        }

        let count = self.participant_count();
        let seat = self.round.active_seat;
        let proposal = {
            let hand = &self.participants[seat].hand;
            if hand.is_empty() {
                None
            } else {
                self.strategy
                    .propose_play(hand, &self.round.table, self.round.restricted)
            }
        };

        let mut skipped = None;
        let mut finished: SmallVec<[PlayerId; 2]> = SmallVec::new();

        let action = match proposal {
            Some(group) => {
                if !self.round.table.accepts(&group, self.round.restricted) {
                    return Err(EngineError::illegal_state(format!(
                        "{seat} proposed {group}, which the table does not accept"
                    )));
                }
                self.participants[seat].hand.remove_group(&group)?;

                if self.round.table.leading_rank() == Some(group.rank()) {
                    self.skips += 1;
                    skipped = Some(seat.advance(1, count));
                    self.round.active_seat = seat.advance(2, count);
                } else {
                    self.round.active_seat = seat.advance(1, count);
                }

                if let Some(covered) = self.round.table.replace(group) {
                    self.discard.extend(covered.cards());
                }
                self.round.passes = 0;
                self.round.restricted = false;
                self.round.last_player = Some(seat);

                if self.participants[seat].is_out() && self.finish.push(seat) {
                    info!(%seat, rank = self.finish.len(), "participant finished");
                    finished.push(seat);
                }
                TurnAction::Played(group)
            }
            None => {
                self.round.passes += 1;
                self.round.active_seat = seat.advance(1, count);
                TurnAction::Passed
            }
        };

        let instant = self
            .round
            .table
            .leading_rank()
            .is_some_and(Rank::is_instant_ender);
        let round_end = if instant || self.round.passes == count - 1 {
            Some(self.end_round(instant)?)
        } else {
            None
        };

        if let Some(last) = self.settle_last_seat() {
            finished.push(last);
        }

        let event = TurnEvent {
            seat,
            action,
            skipped,
            round_end,
            finished,
        };
        debug!(
            %seat,
            action = ?event.action,
            skipped = ?event.skipped,
            round_ended = event.round_ended(),
            next = %self.round.active_seat,
            "turn"
        );
        self.events.push_back(event.clone());
        Ok(event)
    }

    /// Step until every seat has finished.
    pub fn run(mut self) -> EngineResult<GameRecord> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.into_record())
    }

    /// Consume the engine, returning what happened so far.
    #[must_use]
    pub fn into_record(self) -> GameRecord {
        info!(
            finish_order = ?self.finish.seats(),
            skips = self.skips,
            rounds = self.rounds,
            turns = self.events.len(),
            "game over"
        );
        GameRecord {
            finish_order: self.finish,
            events: self.events,
            skips: self.skips,
            rounds: self.rounds,
        }
    }

    fn end_round(&mut self, instant: bool) -> EngineResult<RoundEnd> {
        let winner = self.round.last_player.take();
        let had_play = match self.round.table.clear() {
            Some(last) => {
                self.discard.extend(last.cards());
                true
            }
            None => false,
        };
        self.round.passes = 0;
        self.round.restricted = had_play;
        self.rounds += 1;

        if had_play {
            self.empty_rounds = 0;
        } else {
            self.empty_rounds += 1;
            // An unrestricted opening always has a single to lead, so a
            // second empty round means the strategy refused to open.
            if self.empty_rounds > 1 {
                return Err(EngineError::illegal_state(
                    "two consecutive rounds ended without an opening play",
                ));
            }
            warn!("round ended without a play, next opening unrestricted");
        }

        info!(winner = ?winner, instant, "round ended");
        Ok(RoundEnd {
            winner,
            instant,
            restriction_lifted: !had_play,
        })
    }

    /// Append the last seat holding cards once everyone else is out.
    fn settle_last_seat(&mut self) -> Option<PlayerId> {
        if self.finish.len() + 1 != self.participant_count() {
            return None;
        }
        let last = self
            .participants
            .player_ids()
            .find(|&seat| !self.finish.contains(seat))?;
        self.finish.push(last);
        info!(seat = %last, rank = self.finish.len(), "last participant placed");
        Some(last)
    }
}

/// Play a full game from `starting_seat` and return its record.
pub fn play_round_robin<S: PlayStrategy + ?Sized>(
    participants: &mut PlayerMap<Participant>,
    starting_seat: PlayerId,
    strategy: &S,
) -> EngineResult<GameRecord> {
    RoundEngine::new(participants, strategy, starting_seat)?.run()
}
