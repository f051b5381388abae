//! Hearts-specific rules layered on the generic board: which cards may be
//! played, what has become public knowledge, and penalty points.

use crate::board::{Board, PlayType};
use crate::trick::Trick;
use crate::{Card, Error, Hand, Seat, Suit, QUEEN_OF_SPADES, TWO_OF_CLUBS};
use serde::{Deserialize, Serialize};

/// Public facts a strategy may rely on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub is_hearts_broken: bool,
    pub is_queen_played: bool,
}

/// Has a heart appeared in any swept trick?
pub fn is_hearts_broken(board: &Board) -> bool {
    board.played_cards().any(|card| card.suit == Suit::Hearts)
}

pub fn game_state(board: &Board) -> GameState {
    GameState {
        is_hearts_broken: is_hearts_broken(board),
        is_queen_played: board.hands().find_card(QUEEN_OF_SPADES).is_none(),
    }
}

/// Cards the seat to act may legally play, grouped by suit.
///
/// - The opening play of the deal must be the two of clubs.
/// - A leader may not lead hearts until they are broken, unless the hand
///   holds nothing else.
/// - A follower must follow suit when able; otherwise anything goes.
pub fn legal_plays(board: &Board) -> Result<Hand, Error> {
    let current = board.current_play().ok_or(Error::BoardComplete)?;
    let player = current.player;
    let hand = board.hand(player);

    match board.play_type().ok_or(Error::BoardComplete)? {
        PlayType::Lead => {
            if board.completed_tricks().is_empty() {
                if !hand.has_card(TWO_OF_CLUBS) {
                    return Err(Error::MissingTwoOfClubs(player));
                }
                return Ok(Hand::from_cards([TWO_OF_CLUBS]));
            }

            let only_hearts = hand.suit_length(Suit::Hearts) == hand.len();
            if is_hearts_broken(board) || only_hearts {
                Ok(hand.clone())
            } else {
                Ok(hand.without_suit(Suit::Hearts))
            }
        }
        PlayType::OnSuit => {
            let suit = current.trick.suit_led().ok_or(Error::EmptyTrick)?;
            Ok(hand.only_suit(suit))
        }
        PlayType::OffSuit => Ok(hand.clone()),
    }
}

/// Penalty points carried by a single card
pub fn points_for_card(card: Card) -> u32 {
    if card.suit == Suit::Hearts {
        1
    } else if card == QUEEN_OF_SPADES {
        13
    } else {
        0
    }
}

pub fn points_for_trick(trick: &Trick) -> u32 {
    trick.cards().map(points_for_card).sum()
}

/// Points each seat has collected so far in this deal, indexed by seat
pub fn points_taken(board: &Board) -> [u32; 4] {
    let mut points = [0; 4];
    for seat in Seat::ALL {
        points[seat.index()] = board
            .cards_taken(seat)
            .iter()
            .copied()
            .map(points_for_card)
            .sum();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deal, Rank};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(suit, rank)
    }

    /// North leads the 2C; everyone else holds a heart and a spade, with
    /// West void in clubs.
    fn small_board() -> Board {
        let mut deal = Deal::new();
        deal.north = Hand::from_cards([
            card(Rank::Two, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Three, Suit::Spades),
        ]);
        deal.east = Hand::from_cards([
            card(Rank::Five, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Four, Suit::Spades),
        ]);
        deal.south = Hand::from_cards([
            card(Rank::King, Suit::Clubs),
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Five, Suit::Spades),
        ]);
        deal.west = Hand::from_cards([
            card(Rank::Two, Suit::Hearts),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Six, Suit::Spades),
        ]);
        Board::new(deal).unwrap()
    }

    #[test]
    fn test_first_play_must_be_two_of_clubs() {
        let board = small_board();
        let legal = legal_plays(&board).unwrap();
        assert_eq!(legal.len(), 1);
        assert!(legal.has_card(TWO_OF_CLUBS));
    }

    #[test]
    fn test_first_player_without_two_of_clubs_is_an_error() {
        let board = Board::start(small_board().hands().clone(), Seat::East, None);
        assert_eq!(legal_plays(&board), Err(Error::MissingTwoOfClubs(Seat::East)));
    }

    #[test]
    fn test_must_follow_suit() {
        let board = small_board().play(TWO_OF_CLUBS).unwrap();
        let legal = legal_plays(&board).unwrap();
        assert_eq!(legal.cards().collect::<Vec<_>>(), vec![card(Rank::Five, Suit::Clubs)]);
    }

    #[test]
    fn test_void_follower_may_discard_anything() {
        let board = small_board()
            .play(TWO_OF_CLUBS)
            .unwrap()
            .play(card(Rank::Five, Suit::Clubs))
            .unwrap()
            .play(card(Rank::King, Suit::Clubs))
            .unwrap();
        let legal = legal_plays(&board).unwrap();
        assert_eq!(&legal, board.hand(Seat::West));
    }

    #[test]
    fn test_hearts_cannot_be_led_until_broken() {
        // West discards a spade: hearts still unbroken, South leads
        let board = small_board()
            .play(TWO_OF_CLUBS)
            .unwrap()
            .play(card(Rank::Five, Suit::Clubs))
            .unwrap()
            .play(card(Rank::King, Suit::Clubs))
            .unwrap()
            .play(card(Rank::Six, Suit::Spades))
            .unwrap();
        assert_eq!(board.player(), Some(Seat::South));
        assert!(!is_hearts_broken(&board));
        let legal = legal_plays(&board).unwrap();
        assert_eq!(legal.suit_length(Suit::Hearts), 0);
        assert!(legal.has_card(card(Rank::Five, Suit::Spades)));
    }

    #[test]
    fn test_hearts_broken_by_a_discard() {
        let board = small_board()
            .play(TWO_OF_CLUBS)
            .unwrap()
            .play(card(Rank::Five, Suit::Clubs))
            .unwrap()
            .play(card(Rank::King, Suit::Clubs))
            .unwrap();
        assert!(!is_hearts_broken(&board));
        // West's heart completes the trick, which sweeps to South
        let board = board.play(card(Rank::Two, Suit::Hearts)).unwrap();
        assert!(is_hearts_broken(&board));
        let legal = legal_plays(&board).unwrap();
        assert!(legal.has_card(card(Rank::Jack, Suit::Hearts)));
        assert_eq!(points_taken(&board), [0, 0, 1, 0]);
    }

    #[test]
    fn test_hearts_only_hand_may_lead_hearts() {
        let mut deal = Deal::new();
        deal.north = Hand::from_cards([card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Hearts)]);
        deal.east = Hand::from_cards([card(Rank::Three, Suit::Clubs), card(Rank::Four, Suit::Hearts)]);
        deal.south = Hand::from_cards([card(Rank::Four, Suit::Clubs), card(Rank::Five, Suit::Hearts)]);
        deal.west = Hand::from_cards([card(Rank::Ace, Suit::Clubs), card(Rank::Six, Suit::Hearts)]);
        let board = Board::new(deal).unwrap();
        let board = [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Ace, Suit::Clubs),
        ]
        .into_iter()
        .try_fold(board, |b, c| b.play(c))
        .unwrap();

        assert_eq!(board.player(), Some(Seat::West));
        assert!(!is_hearts_broken(&board));
        let legal = legal_plays(&board).unwrap();
        assert_eq!(legal.cards().collect::<Vec<_>>(), vec![card(Rank::Six, Suit::Hearts)]);
    }

    #[test]
    fn test_game_state_tracks_queen() {
        let board = small_board();
        assert_eq!(game_state(&board), GameState::default());

        let mut deal = board.hands().clone();
        deal.west.remove_card(QUEEN_OF_SPADES);
        let board = Board::new(deal).unwrap();
        assert!(game_state(&board).is_queen_played);
    }

    #[test]
    fn test_points() {
        assert_eq!(points_for_card(QUEEN_OF_SPADES), 13);
        assert_eq!(points_for_card(card(Rank::Two, Suit::Hearts)), 1);
        assert_eq!(points_for_card(card(Rank::Ace, Suit::Spades)), 0);
        assert_eq!(points_for_card(TWO_OF_CLUBS), 0);
    }
}
