use crate::{Card, Seat};
use thiserror::Error;

/// Failures of the board state machine and the rules built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The acting seat does not hold the card it tried to play.
    #[error("{card} is not {seat}'s card to play")]
    NotHeld { seat: Seat, card: Card },

    #[error("tried to play on a completed board")]
    BoardComplete,

    /// The first seat to act does not hold the opening card.
    #[error("{0} is first to play but does not hold 2C")]
    MissingTwoOfClubs(Seat),

    #[error("unable to locate the two of clubs in the deal")]
    NoTwoOfClubs,

    #[error("cannot determine the winner of a trick with no plays")]
    EmptyTrick,
}

/// Problems found when validating a deal or exchanging cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("{seat} holds {count} cards, expected {expected}")]
    WrongCount {
        seat: Seat,
        count: usize,
        expected: usize,
    },

    #[error("{0} is dealt more than once")]
    Duplicate(Card),

    #[error("{0} is missing from the deal")]
    Missing(Card),

    #[error("{seat} cannot pass {card}: not in hand")]
    PassNotHeld { seat: Seat, card: Card },
}
