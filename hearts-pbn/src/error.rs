use hearts_core::{Card, Seat};
use thiserror::Error;

/// Error type for card and deal notation parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid card {0:?}: expected a rank and a suit, like \"QS\"")]
    CardLength(String),

    #[error("invalid rank character {0:?}")]
    Rank(char),

    #[error("invalid suit character {0:?}")]
    Suit(char),

    #[error("deal must have four hands (got {0})")]
    HandCount(usize),

    #[error("deal must start with either \"N:\", \"E:\", \"S:\" or \"W:\"")]
    MissingSeat,

    #[error("{seat} must have four suits, got {count}: {hand}")]
    SuitCount {
        seat: Seat,
        count: usize,
        hand: String,
    },

    #[error("{seat} lists {card} twice")]
    DuplicateCard { seat: Seat, card: Card },

    #[error("expected [Deal \"...\"] format")]
    Tag,
}
