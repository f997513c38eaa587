//! Sessions: consecutive games sharing one table of participants.
//!
//! - `standings`: ranks from a finish order, and the between-game exchange
//! - `driver`: `Session`, which deals, exchanges and runs each game

pub mod driver;
pub mod standings;

pub use driver::{GameReport, Session};
pub use standings::{assign_ranks, exchange, Swap};
