use crate::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};

/// A player's holding, grouped by suit.
///
/// Each suit's cards are kept in ascending rank order with no duplicates.
/// The same shape doubles as a "sub-hand", e.g. the set of legal plays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hand {
    holdings: [Vec<Card>; 4],
}

impl Hand {
    /// Create a new empty hand
    pub fn new() -> Self {
        Hand::default()
    }

    /// Group cards into suits, each sorted ascending
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut hand = Hand::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Add a card to the hand, keeping its suit sorted.
    /// Adding a card that is already held is a no-op.
    pub fn add_card(&mut self, card: Card) {
        let holding = &mut self.holdings[card.suit.index()];
        if let Err(pos) = holding.binary_search(&card) {
            holding.insert(pos, card);
        }
    }

    /// Remove a card, returning whether it was held
    pub fn remove_card(&mut self, card: Card) -> bool {
        let holding = &mut self.holdings[card.suit.index()];
        match holding.binary_search(&card) {
            Ok(pos) => {
                holding.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Cards held in one suit, ascending by rank
    pub fn holding(&self, suit: Suit) -> &[Card] {
        &self.holdings[suit.index()]
    }

    /// All cards, suit by suit in iteration order, ascending within a suit
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.holdings.iter().flatten().copied()
    }

    /// Get the number of cards in the hand
    pub fn len(&self) -> usize {
        self.holdings.iter().map(Vec::len).sum()
    }

    /// Check if the hand is empty
    pub fn is_empty(&self) -> bool {
        self.holdings.iter().all(Vec::is_empty)
    }

    /// Count cards of a specific suit
    pub fn suit_length(&self, suit: Suit) -> usize {
        self.holdings[suit.index()].len()
    }

    /// Get the suit lengths in iteration order [S, H, D, C]
    pub fn suit_lengths(&self) -> [usize; 4] {
        [
            self.suit_length(Suit::Spades),
            self.suit_length(Suit::Hearts),
            self.suit_length(Suit::Diamonds),
            self.suit_length(Suit::Clubs),
        ]
    }

    /// Check if hand contains a specific card
    pub fn has_card(&self, card: Card) -> bool {
        self.holdings[card.suit.index()].binary_search(&card).is_ok()
    }

    /// The non-empty suit with the fewest cards.
    /// Ties go to the suit that comes first in `Suit::ALL`.
    pub fn shortest_suit(&self) -> Option<Suit> {
        let mut shortest: Option<Suit> = None;
        for suit in Suit::ALL {
            let len = self.suit_length(suit);
            if len == 0 {
                continue;
            }
            match shortest {
                Some(best) if self.suit_length(best) <= len => {}
                _ => shortest = Some(suit),
            }
        }
        shortest
    }

    /// Lowest card held in a suit
    pub fn lowest_in_suit(&self, suit: Suit) -> Option<Card> {
        self.holding(suit).first().copied()
    }

    /// Highest card held in a suit
    pub fn highest_in_suit(&self, suit: Suit) -> Option<Card> {
        self.holding(suit).last().copied()
    }

    /// Highest card in a suit strictly below the given rank
    pub fn highest_below(&self, suit: Suit, rank: Rank) -> Option<Card> {
        self.holding(suit)
            .iter()
            .rev()
            .find(|c| c.rank < rank)
            .copied()
    }

    /// A copy of this hand restricted to a single suit
    pub fn only_suit(&self, suit: Suit) -> Hand {
        let mut hand = Hand::new();
        hand.holdings[suit.index()] = self.holdings[suit.index()].clone();
        hand
    }

    /// A copy of this hand with one suit emptied
    pub fn without_suit(&self, suit: Suit) -> Hand {
        let mut hand = self.clone();
        hand.holdings[suit.index()].clear();
        hand
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand::from_cards(iter)
    }
}
