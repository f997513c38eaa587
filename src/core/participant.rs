//! A seated participant: name, hand and last finishing rank.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::Hand;

/// One seat's persistent state across a session.
///
/// The hand is refilled every game; `rank` is cleared when a game starts
/// and set once the finish order is complete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub hand: Hand,
    /// 1-based finishing position in the most recent completed game.
    pub rank: Option<usize>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hand(name, Hand::new())
    }

    pub fn with_hand(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
            rank: None,
        }
    }

    /// Out of cards for the current game.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty()
    }
}

/// `count` empty-handed participants named `Player 1`..`Player n`.
#[must_use]
pub fn seat_participants(count: usize) -> PlayerMap<Participant> {
    PlayerMap::new(count, |seat: PlayerId| {
        Participant::new(format!("Player {}", seat.index() + 1))
    })
}
