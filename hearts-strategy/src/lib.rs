//! Strategies for choosing which card to play or pass.
//!
//! A [`Strategy`] only ever sees the acting seat's own hand, the trick in
//! progress, public [`GameState`](hearts_core::GameState), and the legal
//! candidates. [`make_play`] assembles those from a board and dispatches on
//! whether the seat is leading, following, or discarding.

mod basic;
mod error;
mod strategy;

pub use basic::BasicStrategy;
pub use error::StrategyError;
pub use strategy::{exchange_passes, make_play, play_out, Strategy};
