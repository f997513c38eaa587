//! Same-rank card groups: the unit of every play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rank::Rank;

/// Largest group a play may contain (four of a kind).
pub const MAX_GROUP_SIZE: usize = 4;

/// `size` cards of one `rank`: a single, pair, triple or quad.
///
/// Cards of the same rank are interchangeable, so a group is fully
/// described by its rank and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    rank: Rank,
    size: u8,
}

impl Group {
    /// Panics if `size` is not in `1..=MAX_GROUP_SIZE`.
    #[must_use]
    pub fn new(rank: Rank, size: usize) -> Self {
        assert!(
            (1..=MAX_GROUP_SIZE).contains(&size),
            "Group size must be 1-{MAX_GROUP_SIZE}"
        );
        Self {
            rank,
            size: size as u8,
        }
    }

    #[must_use]
    pub fn single(rank: Rank) -> Self {
        Self::new(rank, 1)
    }

    /// The rank every card in the group shares.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// The group as individual cards.
    #[must_use]
    pub fn cards(&self) -> SmallVec<[Rank; MAX_GROUP_SIZE]> {
        SmallVec::from_elem(self.rank, self.size())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for i in 0..self.size() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.rank)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_cards() {
        let pair = Group::new(Rank::Queen, 2);
        assert_eq!(pair.rank(), Rank::Queen);
        assert_eq!(pair.size(), 2);
        assert_eq!(pair.cards().as_slice(), &[Rank::Queen, Rank::Queen]);
        assert_eq!(pair.to_string(), "[Q, Q]");
        assert_eq!(Group::single(Rank::Joker).to_string(), "[Joker]");
    }

    #[test]
    #[should_panic(expected = "Group size must be 1-4")]
    fn test_group_too_large() {
        let _ = Group::new(Rank::Three, 5);
    }
}
