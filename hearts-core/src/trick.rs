use crate::{Card, Error, Seat, Suit};
use serde::{Deserialize, Serialize};

/// Plays in a full trick.
pub const TRICK_SIZE: usize = 4;

/// One card played by one seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

/// A trick in progress: who led, and the plays so far in play order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: Seat,
    pub plays: Vec<PlayedCard>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Trick {
            leader,
            plays: Vec::with_capacity(TRICK_SIZE),
        }
    }

    /// Suit of the first card played, if any
    pub fn suit_led(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == TRICK_SIZE
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|p| p.card)
    }

    /// Determine who is currently winning the trick.
    ///
    /// A play takes over when it follows the led suit above a winning card
    /// that also followed, or when it is trump and either outranks the
    /// winning card or the winning card is not trump.
    pub fn find_winner(&self, trump: Option<Suit>) -> Result<Seat, Error> {
        let first = self.plays.first().ok_or(Error::EmptyTrick)?;
        let suit_led = first.card.suit;
        let mut winner = self.leader;
        let mut winning_card = first.card;

        for play in &self.plays[1..] {
            let card = play.card;
            let beats_on_suit = card.suit == suit_led
                && winning_card.suit == suit_led
                && card.rank > winning_card.rank;
            let beats_with_trump = Some(card.suit) == trump
                && (card.rank > winning_card.rank || Some(winning_card.suit) != trump);

            if beats_on_suit || beats_with_trump {
                winner = play.seat;
                winning_card = card;
            }
        }

        Ok(winner)
    }
}

/// A swept trick with its winner fixed at the time it completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteTrick {
    pub trick: Trick,
    pub winner: Seat,
}

impl CompleteTrick {
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.trick.cards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;

    fn trick(plays: &[(Seat, Rank, Suit)]) -> Trick {
        Trick {
            leader: plays[0].0,
            plays: plays
                .iter()
                .map(|&(seat, rank, suit)| PlayedCard {
                    seat,
                    card: Card::new(suit, rank),
                })
                .collect(),
        }
    }

    #[test]
    fn test_winner_without_trump() {
        let t = trick(&[(Seat::North, Rank::Two, Suit::Clubs)]);
        assert_eq!(t.find_winner(None), Ok(Seat::North));

        // Followed suit with a higher card
        let t = trick(&[
            (Seat::North, Rank::Two, Suit::Clubs),
            (Seat::East, Rank::Three, Suit::Clubs),
        ]);
        assert_eq!(t.find_winner(None), Ok(Seat::East));

        // Did not follow suit
        let t = trick(&[
            (Seat::North, Rank::Two, Suit::Clubs),
            (Seat::East, Rank::Three, Suit::Diamonds),
        ]);
        assert_eq!(t.find_winner(None), Ok(Seat::North));
    }

    #[test]
    fn test_winner_with_trump() {
        let hearts = Some(Suit::Hearts);

        let t = trick(&[
            (Seat::North, Rank::Two, Suit::Clubs),
            (Seat::East, Rank::Three, Suit::Clubs),
        ]);
        assert_eq!(t.find_winner(hearts), Ok(Seat::East));

        let t = trick(&[
            (Seat::North, Rank::Two, Suit::Clubs),
            (Seat::East, Rank::Three, Suit::Diamonds),
        ]);
        assert_eq!(t.find_winner(hearts), Ok(Seat::North));

        // Any trump beats a non-trump
        let t = trick(&[
            (Seat::North, Rank::Five, Suit::Clubs),
            (Seat::East, Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(t.find_winner(hearts), Ok(Seat::East));

        // Over-trump
        let t = trick(&[
            (Seat::North, Rank::Five, Suit::Clubs),
            (Seat::East, Rank::Two, Suit::Hearts),
            (Seat::South, Rank::Three, Suit::Hearts),
        ]);
        assert_eq!(t.find_winner(hearts), Ok(Seat::South));

        // Following suit cannot displace a trump
        let t = trick(&[
            (Seat::North, Rank::Five, Suit::Clubs),
            (Seat::East, Rank::Two, Suit::Hearts),
            (Seat::South, Rank::Ace, Suit::Clubs),
            (Seat::West, Rank::King, Suit::Diamonds),
        ]);
        assert_eq!(t.find_winner(hearts), Ok(Seat::East));
    }

    #[test]
    fn test_empty_trick_has_no_winner() {
        assert_eq!(Trick::new(Seat::West).find_winner(None), Err(Error::EmptyTrick));
    }

    #[test]
    fn test_suit_led() {
        let t = trick(&[
            (Seat::South, Rank::Nine, Suit::Diamonds),
            (Seat::West, Rank::Ace, Suit::Spades),
        ]);
        assert_eq!(t.suit_led(), Some(Suit::Diamonds));
        assert_eq!(Trick::new(Seat::South).suit_led(), None);
        assert!(!t.is_complete());
    }
}
