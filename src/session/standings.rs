//! Ranks from a finish order, and the card exchange between games.
//!
//! ## Exchange
//!
//! - Last place hands their 2 best cards to first place, who hands back
//!   their 2 worst.
//! - With more than 3 seats, second-to-last hands their best card to
//!   second place, who hands back their worst.
//!
//! Both sides of a pair are chosen before either transfer, so a card
//! received in a swap is never sent straight back.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Rank;
use crate::core::{EngineError, EngineResult, Participant, PlayerId, PlayerMap};
use crate::rules::FinishOrder;

/// 1-based rank for every seat in `order`.
#[must_use]
pub fn assign_ranks(order: &FinishOrder) -> FxHashMap<PlayerId, usize> {
    order
        .seats()
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, i + 1))
        .collect()
}

/// One pairwise swap performed by `exchange`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    /// Lower-ranked seat; gives its best cards.
    pub giver: PlayerId,
    /// Higher-ranked seat; returns its worst cards.
    pub receiver: PlayerId,
    pub given: Vec<Rank>,
    pub returned: Vec<Rank>,
}

/// Run the post-game exchange on `participants` according to `order`.
///
/// Tables under 3 seats exchange nothing. `order` must rank every seat
/// exactly once. All cards are selected before any change, so on error
/// every hand is left as it was.
pub fn exchange(
    participants: &mut PlayerMap<Participant>,
    order: &FinishOrder,
) -> EngineResult<Vec<Swap>> {
    let count = participants.player_count();
    if count < 3 {
        return Ok(Vec::new());
    }
    order.check_complete(count)?;

    let mut pairs = vec![(0, 1, 2)];
    if count > 3 {
        pairs.push((1, 2, 1));
    }

    let mut swaps = Vec::with_capacity(pairs.len());
    for (from_bottom, rank, cards) in pairs {
        let (Some(giver), Some(receiver)) = (order.from_bottom(from_bottom), order.at_rank(rank))
        else {
            return Err(EngineError::illegal_state("finish order shorter than its length"));
        };
        swaps.push(Swap {
            giver,
            receiver,
            given: participants[giver].hand.best(cards)?,
            returned: participants[receiver].hand.worst(cards)?,
        });
    }

    // Pairs never share a seat, so each selection is still held here.
    for swap in &swaps {
        let (low, high) = participants.pair_mut(swap.giver, swap.receiver);
        low.hand.remove(&swap.given)?;
        high.hand.remove(&swap.returned)?;
        high.hand.add(swap.given.iter().copied());
        low.hand.add(swap.returned.iter().copied());
        debug!(
            giver = %swap.giver,
            receiver = %swap.receiver,
            given = ?swap.given,
            returned = ?swap.returned,
            "cards exchanged"
        );
    }
    Ok(swaps)
}
