//! A participant's hand: a multiset of ranks.
//!
//! Cards keep the order they arrived in. Play selection only looks at
//! per-rank counts, while `best`/`worst` break ties by that arrival order.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::group::{Group, MAX_GROUP_SIZE};
use super::rank::{Rank, RANK_COUNT};
use crate::core::{EngineError, EngineResult};

/// Cards held by one participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in arrival order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Copies of `rank` currently held.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|&&c| c == rank).count()
    }

    /// Per-rank counts indexed by order key.
    #[must_use]
    pub fn counts(&self) -> [u8; RANK_COUNT] {
        let mut counts = [0u8; RANK_COUNT];
        for card in &self.cards {
            counts[card.order_key() as usize] += 1;
        }
        counts
    }

    /// Every rank held at least `group_size` times, as one group each,
    /// weakest rank first. Sizes outside `1..=MAX_GROUP_SIZE` yield nothing.
    ///
    /// Calling again restarts the sequence from the current contents.
    pub fn legal_groups(&self, group_size: usize) -> impl Iterator<Item = Group> + '_ {
        let counts = self.counts();
        let valid = (1..=MAX_GROUP_SIZE).contains(&group_size);
        Rank::ALL
            .into_iter()
            .filter(move |rank| valid && counts[rank.order_key() as usize] as usize >= group_size)
            .map(move |rank| Group::new(rank, group_size))
    }

    /// Whether the hand can supply every card of `group`.
    #[must_use]
    pub fn holds(&self, group: &Group) -> bool {
        self.count(group.rank()) >= group.size()
    }

    /// Remove `cards` with multiplicity. Nothing is removed on failure.
    pub fn remove(&mut self, cards: &[Rank]) -> EngineResult<()> {
        let mut needed = [0usize; RANK_COUNT];
        for card in cards {
            needed[card.order_key() as usize] += 1;
        }
        let held = self.counts();
        if let Some(rank) = Rank::ALL
            .into_iter()
            .find(|r| needed[r.order_key() as usize] > held[r.order_key() as usize] as usize)
        {
            return Err(EngineError::illegal_state(format!(
                "cannot remove {}x {} from a hand holding {}",
                needed[rank.order_key() as usize],
                rank,
                held[rank.order_key() as usize]
            )));
        }

        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        Ok(())
    }

    /// Remove the cards of `group`.
    pub fn remove_group(&mut self, group: &Group) -> EngineResult<()> {
        self.remove(&group.cards())
    }

    /// Append cards unconditionally.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Rank>) {
        self.cards.extend(cards);
    }

    /// The `n` strongest cards, strongest first. Ties keep arrival order.
    pub fn best(&self, n: usize) -> EngineResult<Vec<Rank>> {
        self.select(n, |order| order.sort_by_key(|&card| Reverse(card)))
    }

    /// The `n` weakest cards, weakest first. Ties keep arrival order.
    pub fn worst(&self, n: usize) -> EngineResult<Vec<Rank>> {
        self.select(n, |order| order.sort_by_key(|&card| card))
    }

    fn select(&self, n: usize, sort: impl FnOnce(&mut Vec<Rank>)) -> EngineResult<Vec<Rank>> {
        if n > self.cards.len() {
            return Err(EngineError::illegal_state(format!(
                "asked for {n} cards from a hand of {}",
                self.cards.len()
            )));
        }
        // Stable sort, so equal ranks stay in arrival order.
        let mut order = self.cards.clone();
        sort(&mut order);
        order.truncate(n);
        Ok(order)
    }

    /// Cards sorted weakest first, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Rank> {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        cards
    }

    /// Empty the hand, returning its cards.
    pub fn take_all(&mut self) -> Vec<Rank> {
        std::mem::take(&mut self.cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<_> = self.sorted().iter().map(|r| r.label()).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_legal_groups_one_per_rank() {
        let hand = Hand::from_cards([Nine, Three, Nine, Nine, Three, Joker]);

        let singles: Vec<_> = hand.legal_groups(1).map(|g| g.rank()).collect();
        assert_eq!(singles, vec![Three, Nine, Joker]);

        let pairs: Vec<_> = hand.legal_groups(2).collect();
        assert_eq!(pairs, vec![Group::new(Three, 2), Group::new(Nine, 2)]);

        let triples: Vec<_> = hand.legal_groups(3).collect();
        assert_eq!(triples, vec![Group::new(Nine, 3)]);

        assert_eq!(hand.legal_groups(4).count(), 0);
        assert_eq!(hand.legal_groups(0).count(), 0);
    }

    #[test]
    fn test_legal_groups_restartable() {
        let hand = Hand::from_cards([Five, Five, King]);
        let first: Vec<_> = hand.legal_groups(1).collect();
        let second: Vec<_> = hand.legal_groups(1).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_with_multiplicity() {
        let mut hand = Hand::from_cards([Queen, Three, Queen, Ace]);
        hand.remove(&[Queen, Queen]).unwrap();
        assert_eq!(hand.cards(), &[Three, Ace]);
    }

    #[test]
    fn test_remove_missing_is_atomic() {
        let mut hand = Hand::from_cards([Queen, Three]);

        let err = hand.remove(&[Three, Queen, Queen]).unwrap_err();
        assert!(err.is_invariant_violation());
        assert_eq!(hand.cards(), &[Queen, Three]);

        assert!(hand.remove_group(&Group::single(Joker)).is_err());
    }

    #[test]
    fn test_best_and_worst() {
        let hand = Hand::from_cards([Five, Two, Three, Ace, Joker, Three]);

        assert_eq!(hand.best(2).unwrap(), vec![Joker, Two]);
        assert_eq!(hand.worst(2).unwrap(), vec![Three, Three]);
        assert_eq!(hand.best(0).unwrap(), Vec::<Rank>::new());

        let err = hand.worst(7).unwrap_err();
        assert!(matches!(err, EngineError::IllegalState { .. }));
    }

    #[test]
    fn test_add_and_take_all() {
        let mut hand = Hand::new();
        hand.add([King, Four]);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.sorted(), vec![Four, King]);
        assert_eq!(hand.to_string(), "[4, K]");

        let cards = hand.take_all();
        assert_eq!(cards, vec![King, Four]);
        assert!(hand.is_empty());
    }
}
