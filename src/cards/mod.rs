//! Cards: ranks, groups, hands and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: The 14-rank alphabet with its fixed order and special flags
//! - `Group`: One to four cards of a single rank, the unit of every play
//! - `Hand`: A participant's multiset of ranks
//!
//! Suits are irrelevant to the rules, so a card is just a `Rank`.

pub mod deck;
pub mod group;
pub mod hand;
pub mod rank;

pub use deck::{deal, shuffled_deck, standard_deck, DECK_SIZE};
pub use group::{Group, MAX_GROUP_SIZE};
pub use hand::Hand;
pub use rank::{Rank, RANK_COUNT};
