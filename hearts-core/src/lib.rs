//! Core types for Hearts: cards, hands, deals, and the board that tracks a
//! deal trick by trick, plus the rules that decide which cards may be played.

mod board;
mod card;
mod deal;
mod error;
mod hand;
mod rules;
mod trick;

pub use board::{Board, CurrentPlay, PlayType, TRICKS_PER_DEAL};
pub use card::{Card, Rank, Suit, QUEEN_OF_SPADES, TWO_OF_CLUBS};
pub use deal::{full_deck, Deal, DealGenerator, PassDirection, Seat, HAND_SIZE};
pub use error::{DealError, Error};
pub use hand::Hand;
pub use rules::{
    game_state, is_hearts_broken, legal_plays, points_for_card, points_for_trick, points_taken,
    GameState,
};
pub use trick::{CompleteTrick, PlayedCard, Trick, TRICK_SIZE};
