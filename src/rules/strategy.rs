//! Play selection.
//!
//! Strategies are trait-based so the heuristic can be swapped without
//! touching `RoundEngine`. A strategy only proposes; the engine commits
//! the removal from the hand.

use crate::cards::{Group, Hand, MAX_GROUP_SIZE};

use super::table::TableState;

/// Chooses what a participant plays against the current table.
pub trait PlayStrategy {
    /// Propose a legal group from `hand`, or `None` to pass.
    ///
    /// Must not return a group the hand cannot supply or the table would
    /// refuse; the engine reports that as an illegal state.
    fn propose_play(&self, hand: &Hand, table: &TableState, restricted: bool) -> Option<Group>;
}

/// Play the weakest sufficient group, keeping stronger cards back.
///
/// Opening a trick: the smallest group size that has any candidate, then
/// the weakest rank at that size. Following: the weakest rank held in the
/// table's group size that the table accepts. Wild ranks are considered
/// in order like any other, so they only come out when nothing cheaper
/// follows.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestSufficient;

impl PlayStrategy for LowestSufficient {
    fn propose_play(&self, hand: &Hand, table: &TableState, restricted: bool) -> Option<Group> {
        match table.group_size() {
            None => (1..=MAX_GROUP_SIZE).find_map(|size| {
                hand.legal_groups(size)
                    .find(|group| table.accepts(group, restricted))
            }),
            Some(size) => hand
                .legal_groups(size)
                .find(|group| table.accepts(group, restricted)),
        }
    }
}
