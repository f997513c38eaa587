//! Finishing order for one game.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, PlayerId};

/// Seats in the order their hands ran out. Append-only within a game.
///
/// A seat's rank is its 1-based position here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishOrder {
    seats: Vec<PlayerId>,
}

impl FinishOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `seat` as finished. Returns false if it already was.
    pub fn push(&mut self, seat: PlayerId) -> bool {
        if self.contains(seat) {
            return false;
        }
        self.seats.push(seat);
        true
    }

    #[must_use]
    pub fn contains(&self, seat: PlayerId) -> bool {
        self.seats.contains(&seat)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seats, first finisher first.
    #[must_use]
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }

    /// 1-based rank of `seat`, if it has finished.
    #[must_use]
    pub fn rank_of(&self, seat: PlayerId) -> Option<usize> {
        self.seats.iter().position(|&s| s == seat).map(|i| i + 1)
    }

    /// Seat holding 1-based `rank`.
    #[must_use]
    pub fn at_rank(&self, rank: usize) -> Option<PlayerId> {
        rank.checked_sub(1).and_then(|i| self.seats.get(i).copied())
    }

    /// Seat `offset` places from the bottom (0 = last place).
    #[must_use]
    pub fn from_bottom(&self, offset: usize) -> Option<PlayerId> {
        self.seats.iter().rev().nth(offset).copied()
    }

    /// Check that this ranks every seat of a `count`-seat table exactly once.
    ///
    /// Orders built with `push` are always unique, but a decoded order may
    /// not be.
    pub fn check_complete(&self, count: usize) -> EngineResult<()> {
        if self.seats.len() != count {
            return Err(EngineError::illegal_state(format!(
                "finish order ranks {} seats, table has {count}",
                self.seats.len()
            )));
        }
        let mut seen = vec![false; count];
        for seat in &self.seats {
            match seen.get_mut(seat.index()) {
                None => {
                    return Err(EngineError::illegal_state(format!(
                        "finish order names {seat} on a table of {count}"
                    )));
                }
                Some(true) => {
                    return Err(EngineError::illegal_state(format!(
                        "finish order ranks {seat} twice"
                    )));
                }
                Some(slot) => *slot = true,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_unique() {
        let mut order = FinishOrder::new();
        assert!(order.push(PlayerId::new(2)));
        assert!(order.push(PlayerId::new(0)));
        assert!(!order.push(PlayerId::new(2)));

        assert_eq!(order.len(), 2);
        assert_eq!(order.seats(), &[PlayerId::new(2), PlayerId::new(0)]);
    }

    #[test]
    fn test_rank_lookups() {
        let mut order = FinishOrder::new();
        for seat in [1, 3, 0, 2] {
            order.push(PlayerId::new(seat));
        }

        assert_eq!(order.rank_of(PlayerId::new(1)), Some(1));
        assert_eq!(order.rank_of(PlayerId::new(2)), Some(4));
        assert_eq!(order.at_rank(2), Some(PlayerId::new(3)));
        assert_eq!(order.at_rank(0), None);
        assert_eq!(order.at_rank(5), None);
        assert_eq!(order.from_bottom(0), Some(PlayerId::new(2)));
        assert_eq!(order.from_bottom(1), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_check_complete() {
        let mut order = FinishOrder::new();
        for seat in [2, 0, 1] {
            order.push(PlayerId::new(seat));
        }
        assert!(order.check_complete(3).is_ok());
        assert!(order.check_complete(4).is_err());

        let out_of_range = FinishOrder {
            seats: vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(5)],
        };
        assert!(out_of_range.check_complete(3).unwrap_err().is_invariant_violation());

        let repeated = FinishOrder {
            seats: vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(1)],
        };
        assert!(repeated.check_complete(3).is_err());
    }
}
