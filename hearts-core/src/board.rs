//! The authoritative state of a deal in progress.
//!
//! A [`Board`] is never mutated in place: [`Board::play`] returns a fresh
//! value, so earlier boards stay valid for replay or for exploring several
//! continuations from the same position.

use crate::trick::{CompleteTrick, PlayedCard, Trick};
use crate::{Card, Deal, Error, Hand, Seat, Suit, TWO_OF_CLUBS};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Tricks in a full deal.
pub const TRICKS_PER_DEAL: usize = 13;

/// The trick being played and the seat to act in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPlay {
    pub trick: Trick,
    pub player: Seat,
}

/// What kind of play the seat to act is making
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayType {
    /// Opening a new trick
    Lead,
    /// Following the suit led
    OnSuit,
    /// Unable to follow, so discarding
    OffSuit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    trump: Option<Suit>,
    completed_tricks: Vec<CompleteTrick>,
    current_play: Option<CurrentPlay>,
    hands: Deal,
    cards_taken: [Vec<Card>; 4],
}

impl Board {
    /// Start a Hearts deal: no trump, and whoever holds the two of clubs leads.
    pub fn new(deal: Deal) -> Result<Self, Error> {
        let leader = deal.find_card(TWO_OF_CLUBS).ok_or(Error::NoTwoOfClubs)?;
        Ok(Board::start(deal, leader, None))
    }

    /// Start a deal with an explicit leader and optional trump suit
    pub fn start(deal: Deal, leader: Seat, trump: Option<Suit>) -> Self {
        Board {
            trump,
            completed_tricks: Vec::with_capacity(TRICKS_PER_DEAL),
            current_play: Some(CurrentPlay {
                trick: Trick::new(leader),
                player: leader,
            }),
            hands: deal,
            cards_taken: Default::default(),
        }
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn completed_tricks(&self) -> &[CompleteTrick] {
        &self.completed_tricks
    }

    /// The trick in progress, or `None` once all tricks have been played
    pub fn current_play(&self) -> Option<&CurrentPlay> {
        self.current_play.as_ref()
    }

    /// The seat to act next
    pub fn player(&self) -> Option<Seat> {
        self.current_play.as_ref().map(|c| c.player)
    }

    /// Cards not yet played
    pub fn hands(&self) -> &Deal {
        &self.hands
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        self.hands.hand(seat)
    }

    /// Cards won in tricks by a seat, in the order they were collected
    pub fn cards_taken(&self, seat: Seat) -> &[Card] {
        &self.cards_taken[seat.index()]
    }

    pub fn tricks_won(&self, seat: Seat) -> usize {
        self.completed_tricks
            .iter()
            .filter(|t| t.winner == seat)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_tricks.len() == TRICKS_PER_DEAL
    }

    /// Every card from swept tricks, in play order
    pub fn played_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.completed_tricks.iter().flat_map(|t| t.cards())
    }

    /// Classify the pending play. `None` when the board is complete.
    pub fn play_type(&self) -> Option<PlayType> {
        let current = self.current_play.as_ref()?;
        let play_type = match current.trick.suit_led() {
            None => PlayType::Lead,
            Some(suit) if self.hand(current.player).suit_length(suit) > 0 => PlayType::OnSuit,
            Some(_) => PlayType::OffSuit,
        };
        Some(play_type)
    }

    /// Play a card for the seat to act, returning the resulting board.
    ///
    /// Only possession is checked here; whether the card is a legal play is
    /// decided by [`crate::legal_plays`]. A fourth card sweeps the trick to
    /// its winner, who leads next.
    pub fn play(&self, card: Card) -> Result<Board, Error> {
        let mut next = self.clone();
        let CurrentPlay { mut trick, player } =
            next.current_play.take().ok_or(Error::BoardComplete)?;

        if !next.hands.hand_mut(player).remove_card(card) {
            return Err(Error::NotHeld { seat: player, card });
        }
        trace!("{} plays {}", player, card);
        trick.plays.push(PlayedCard { seat: player, card });

        if !trick.is_complete() {
            next.current_play = Some(CurrentPlay {
                trick,
                player: player.next(),
            });
            return Ok(next);
        }

        let winner = trick.find_winner(next.trump)?;
        next.cards_taken[winner.index()].extend(trick.cards());
        next.completed_tricks.push(CompleteTrick { trick, winner });
        debug!(
            "trick {} won by {}",
            next.completed_tricks.len(),
            winner
        );

        if next.completed_tricks.len() < TRICKS_PER_DEAL {
            next.current_play = Some(CurrentPlay {
                trick: Trick::new(winner),
                player: winner,
            });
        }
        Ok(next)
    }
}
