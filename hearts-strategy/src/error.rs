use hearts_core::{Card, DealError, Seat};
use thiserror::Error;

/// Errors that can occur while choosing or applying a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Rules(#[from] hearts_core::Error),

    #[error(transparent)]
    Deal(#[from] DealError),

    #[error("{0} has no legal plays")]
    NoCandidates(Seat),

    /// The strategy picked a card outside the legal set.
    #[error("{seat} chose {card}, which is not a legal play")]
    IllegalChoice { seat: Seat, card: Card },

    #[error("{seat} must pass 3 cards but holds {held}")]
    NotEnoughCards { seat: Seat, held: usize },
}
