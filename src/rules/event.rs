//! Structured per-turn events.
//!
//! The engine never formats text. Every committed turn produces one
//! `TurnEvent` that a reporting layer can render however it likes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Group;
use crate::core::PlayerId;

/// What the acting seat did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Played(Group),
    Passed,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnd {
    /// Seat with the last accepted play. `None` if nobody played.
    pub winner: Option<PlayerId>,
    /// Ended by a 2 or Joker leading the table rather than by passes.
    pub instant: bool,
    /// The next opening may use 2s and Jokers (the round had no play).
    pub restriction_lifted: bool,
}

/// One committed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub seat: PlayerId,
    pub action: TurnAction,
    /// Seat passed over by a rank-match play.
    pub skipped: Option<PlayerId>,
    pub round_end: Option<RoundEnd>,
    /// Seats that finished on this turn, in finishing order.
    pub finished: SmallVec<[PlayerId; 2]>,
}

impl TurnEvent {
    #[must_use]
    pub fn played(&self) -> Option<Group> {
        match self.action {
            TurnAction::Played(group) => Some(group),
            TurnAction::Passed => None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.action == TurnAction::Passed
    }

    #[must_use]
    pub fn skip_triggered(&self) -> bool {
        self.skipped.is_some()
    }

    #[must_use]
    pub fn round_ended(&self) -> bool {
        self.round_end.is_some()
    }

    #[must_use]
    pub fn instant_ender(&self) -> bool {
        self.round_end.is_some_and(|end| end.instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_event_accessors() {
        let event = TurnEvent {
            seat: PlayerId::new(1),
            action: TurnAction::Played(Group::single(Rank::Joker)),
            skipped: None,
            round_end: Some(RoundEnd {
                winner: Some(PlayerId::new(1)),
                instant: true,
                restriction_lifted: false,
            }),
            finished: SmallVec::new(),
        };

        assert_eq!(event.played(), Some(Group::single(Rank::Joker)));
        assert!(!event.is_pass());
        assert!(!event.skip_triggered());
        assert!(event.round_ended());
        assert!(event.instant_ender());
    }

    #[test]
    fn test_event_serialization() {
        let event = TurnEvent {
            seat: PlayerId::new(0),
            action: TurnAction::Passed,
            skipped: None,
            round_end: None,
            finished: SmallVec::new(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: TurnEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
