//! Game rules: table state, play selection and the round state machine.
//!
//! `RoundEngine` calls into a `PlayStrategy` for every turn but decides
//! everything else itself: seat advancement, skips, round ends and the
//! finish order.

pub mod engine;
pub mod event;
pub mod finish;
pub mod strategy;
pub mod table;

pub use engine::{play_round_robin, GameRecord, RoundEngine};
pub use event::{RoundEnd, TurnAction, TurnEvent};
pub use finish::FinishOrder;
pub use strategy::{LowestSufficient, PlayStrategy};
pub use table::{RoundState, TableState};
