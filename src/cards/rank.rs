//! Card ranks and their fixed total order.
//!
//! Order, weakest to strongest: `3 4 5 6 7 8 9 10 J Q K A 2 Joker`.
//! Suits play no part in this game, so a card is fully described by its
//! rank.
//!
//! ## Special ranks
//!
//! - `2` and `Joker` are wild: always a legal follow-up, a round ends the
//!   moment one leads the table, and neither may open a restricted round.
//! - `7` reverses the comparison: while it leads, follow-ups must be
//!   lower or equal instead of higher or equal.

use serde::{Deserialize, Serialize};

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 14;

/// A card rank. Declaration order is the order key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    Joker,
}

impl Rank {
    /// All ranks in ascending order key.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Joker,
    ];

    /// Position in the total order. Strict: no two ranks share a key.
    #[must_use]
    pub const fn order_key(self) -> u8 {
        self as u8
    }

    /// Inverse of `order_key`.
    #[must_use]
    pub fn from_order_key(key: u8) -> Option<Self> {
        Self::ALL.get(key as usize).copied()
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Two | Rank::Joker)
    }

    /// May not open a trick while the restriction flag is armed.
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        self.is_wild()
    }

    /// Leading the table with this rank ends the round at once.
    #[must_use]
    pub const fn is_instant_ender(self) -> bool {
        self.is_wild()
    }

    #[must_use]
    pub const fn is_reversing(self) -> bool {
        matches!(self, Rank::Seven)
    }

    /// Whether `self` may follow `leading` on the table.
    #[must_use]
    pub fn beats(self, leading: Rank) -> bool {
        if self.is_wild() {
            true
        } else if leading.is_reversing() {
            self.order_key() <= leading.order_key()
        } else {
            self.order_key() >= leading.order_key()
        }
    }

    /// Short table label: `3`..`10`, `J`, `Q`, `K`, `A`, `2`, `Joker`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Joker => "Joker",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown rank '{s}'"))
    }
}
