//! Table and round state.
//!
//! ## TableState
//!
//! The group currently leading the trick, or nothing when a round has just
//! started. Once a round has a leading group its size is fixed until the
//! round resets.
//!
//! ## RoundState
//!
//! Whose turn it is, how many consecutive passes have happened, whether
//! the opening restriction is armed, and who made the last accepted play.

use serde::{Deserialize, Serialize};

use crate::cards::{Group, Rank};
use crate::core::PlayerId;

/// The trick's leading play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    play: Option<Group>,
}

impl TableState {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_play(group: Group) -> Self {
        Self { play: Some(group) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.play.is_none()
    }

    #[must_use]
    pub fn leading(&self) -> Option<Group> {
        self.play
    }

    #[must_use]
    pub fn leading_rank(&self) -> Option<Rank> {
        self.play.map(|g| g.rank())
    }

    /// Size every play must match this round, if a play has been made.
    #[must_use]
    pub fn group_size(&self) -> Option<usize> {
        self.play.map(|g| g.size())
    }

    /// Whether `group` is a legal play onto this table.
    ///
    /// A restricted round excludes 2s and Jokers outright. An empty table
    /// accepts any other group; otherwise the size must match and the rank
    /// must follow the leading rank (see `Rank::beats`).
    #[must_use]
    pub fn accepts(&self, group: &Group, restricted: bool) -> bool {
        if restricted && group.rank().is_restricted() {
            return false;
        }
        match self.play {
            None => true,
            Some(leading) => {
                group.size() == leading.size() && group.rank().beats(leading.rank())
            }
        }
    }

    /// Lay `group` on the table, returning the play it covers.
    pub(crate) fn replace(&mut self, group: Group) -> Option<Group> {
        self.play.replace(group)
    }

    /// Clear the table, returning the last play.
    pub(crate) fn clear(&mut self) -> Option<Group> {
        self.play.take()
    }
}

/// Turn-by-turn state of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) active_seat: PlayerId,
    pub(crate) passes: usize,
    pub(crate) restricted: bool,
    pub(crate) table: TableState,
    pub(crate) last_player: Option<PlayerId>,
}

impl RoundState {
    /// Fresh game state: empty table, restriction armed.
    #[must_use]
    pub fn opening(active_seat: PlayerId) -> Self {
        Self {
            active_seat,
            passes: 0,
            restricted: true,
            table: TableState::empty(),
            last_player: None,
        }
    }

    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        self.active_seat
    }

    /// Consecutive passes since the last accepted play.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether 2s and Jokers are barred from the next play.
    #[must_use]
    pub fn restricted(&self) -> bool {
        self.restricted
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Seat that made the last accepted play this round.
    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = TableState::empty();
        assert!(table.is_empty());
        assert_eq!(table.leading_rank(), None);
        assert_eq!(table.group_size(), None);

        assert!(table.accepts(&Group::single(Rank::Three), true));
        assert!(!table.accepts(&Group::single(Rank::Two), true));
        assert!(!table.accepts(&Group::new(Rank::Joker, 2), true));
        assert!(table.accepts(&Group::single(Rank::Joker), false));
    }

    #[test]
    fn test_follow_rules() {
        let table = TableState::with_play(Group::new(Rank::Nine, 2));
        assert_eq!(table.group_size(), Some(2));

        assert!(table.accepts(&Group::new(Rank::Nine, 2), false));
        assert!(table.accepts(&Group::new(Rank::Ace, 2), false));
        assert!(!table.accepts(&Group::new(Rank::Eight, 2), false));
        assert!(!table.accepts(&Group::new(Rank::Ace, 1), false));
        assert!(table.accepts(&Group::new(Rank::Two, 2), false));
        assert!(!table.accepts(&Group::new(Rank::Two, 2), true));

        let seven = TableState::with_play(Group::single(Rank::Seven));
        assert!(seven.accepts(&Group::single(Rank::Three), false));
        assert!(!seven.accepts(&Group::single(Rank::Eight), false));
    }

    #[test]
    fn test_replace_and_clear() {
        let mut table = TableState::empty();
        assert_eq!(table.replace(Group::single(Rank::Four)), None);
        assert_eq!(
            table.replace(Group::single(Rank::Six)),
            Some(Group::single(Rank::Four))
        );
        assert_eq!(table.clear(), Some(Group::single(Rank::Six)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_round_opening() {
        let round = RoundState::opening(PlayerId::new(3));
        assert_eq!(round.active_seat(), PlayerId::new(3));
        assert_eq!(round.passes(), 0);
        assert!(round.restricted());
        assert!(round.table().is_empty());
        assert_eq!(round.last_player(), None);
    }
}
