//! The fixed 54-card deck and the round-robin deal.

use super::hand::Hand;
use super::rank::Rank;
use crate::core::{EngineError, EngineResult, GameRng, PlayerId, PlayerMap};

/// Copies of each rank other than Joker.
pub const COPIES_PER_RANK: usize = 4;

/// Jokers in the deck.
pub const JOKER_COUNT: usize = 2;

/// Total cards: 13 ranks x 4 plus 2 jokers.
pub const DECK_SIZE: usize = 13 * COPIES_PER_RANK + JOKER_COUNT;

/// An unshuffled deck, grouped by rank in ascending order.
#[must_use]
pub fn standard_deck() -> Vec<Rank> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        let copies = if rank == Rank::Joker {
            JOKER_COUNT
        } else {
            COPIES_PER_RANK
        };
        deck.extend(std::iter::repeat(rank).take(copies));
    }
    deck
}

/// A freshly shuffled deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Rank> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Deal `deck` one card at a time: card `i` goes to seat `i % participant_count`.
///
/// `participant_count` must fit a `PlayerId` and be at least 1.
pub fn deal(
    participant_count: usize,
    deck: impl IntoIterator<Item = Rank>,
) -> EngineResult<PlayerMap<Hand>> {
    if participant_count == 0 || participant_count > usize::from(u8::MAX) {
        return Err(EngineError::configuration(format!(
            "cannot deal to {participant_count} seats"
        )));
    }
    let mut hands: PlayerMap<Hand> = PlayerMap::with_default(participant_count);
    for (i, card) in deck.into_iter().enumerate() {
        hands[PlayerId::new((i % participant_count) as u8)].add([card]);
    }
    Ok(hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(DECK_SIZE, 54);

        let hand = Hand::from_cards(deck);
        for rank in Rank::ALL {
            let expected = if rank == Rank::Joker { 2 } else { 4 };
            assert_eq!(hand.count(rank), expected, "count of {rank}");
        }
    }

    #[test]
    fn test_deal_round_robin() {
        let deck = vec![Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven];
        let hands = deal(3, deck).unwrap();

        assert_eq!(hands[PlayerId::new(0)].cards(), &[Rank::Three, Rank::Six]);
        assert_eq!(hands[PlayerId::new(1)].cards(), &[Rank::Four, Rank::Seven]);
        assert_eq!(hands[PlayerId::new(2)].cards(), &[Rank::Five]);
    }

    #[test]
    fn test_deal_full_deck_sizes() {
        for count in 3..=7 {
            let hands = deal(count, shuffled_deck(&mut GameRng::new(9))).unwrap();
            let total: usize = hands.values().map(Hand::len).sum();
            assert_eq!(total, DECK_SIZE);

            let min = hands.values().map(Hand::len).min().unwrap();
            let max = hands.values().map(Hand::len).max().unwrap();
            assert!(max - min <= 1);
        }
    }

    #[test]
    fn test_deal_rejects_empty_table() {
        let err = deal(0, standard_deck()).unwrap_err();
        assert!(matches!(err, EngineError::Configuration { .. }));
        assert!(deal(256, standard_deck()).is_err());
    }
}
