use crate::{Card, DealError, Hand, Rank, Suit};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 13;

/// Represents the four seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    /// All seats in clockwise order starting with North
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next seat in clockwise rotation (N→E→S→W→N)
    pub fn next(self) -> Seat {
        self.offset(1)
    }

    /// The seat `steps` places clockwise from this one
    pub fn offset(self, steps: usize) -> Seat {
        Seat::ALL[(self.index() + steps) % 4]
    }

    /// Get seat as a character (N, E, S, W)
    pub fn to_char(&self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    /// Parse an uppercase seat letter
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Returns a new 52-card deck in canonical card order
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Direction of the pre-play card exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassDirection {
    Left,
    Right,
    Across,
    Hold,
}

impl PassDirection {
    /// Standard rotation: left, right, across, then a hand with no passing
    pub fn for_deal_number(deal_number: usize) -> Self {
        match deal_number % 4 {
            0 => PassDirection::Left,
            1 => PassDirection::Right,
            2 => PassDirection::Across,
            _ => PassDirection::Hold,
        }
    }

    /// The seat that receives the cards passed by `seat`
    pub fn target(self, seat: Seat) -> Seat {
        match self {
            PassDirection::Left => seat.offset(1),
            PassDirection::Across => seat.offset(2),
            PassDirection::Right => seat.offset(3),
            PassDirection::Hold => seat,
        }
    }
}

/// Four hands, one per seat
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deal {
    pub north: Hand,
    pub east: Hand,
    pub south: Hand,
    pub west: Hand,
}

impl Deal {
    /// Create a new empty deal
    pub fn new() -> Self {
        Deal::default()
    }

    /// Get a reference to a hand by seat
    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::North => &self.north,
            Seat::East => &self.east,
            Seat::South => &self.south,
            Seat::West => &self.west,
        }
    }

    /// Get a mutable reference to a hand by seat
    pub fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::North => &mut self.north,
            Seat::East => &mut self.east,
            Seat::South => &mut self.south,
            Seat::West => &mut self.west,
        }
    }

    /// Who holds a given card, if anyone
    pub fn find_card(&self, card: Card) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.hand(seat).has_card(card))
    }

    /// Total cards still held across all seats
    pub fn cards_remaining(&self) -> usize {
        Seat::ALL.iter().map(|&seat| self.hand(seat).len()).sum()
    }

    /// Check that this is a complete deal: 13 cards per seat and each of the
    /// 52 cards held exactly once.
    pub fn validate(&self) -> Result<(), DealError> {
        for seat in Seat::ALL {
            let count = self.hand(seat).len();
            if count != HAND_SIZE {
                return Err(DealError::WrongCount {
                    seat,
                    count,
                    expected: HAND_SIZE,
                });
            }
        }
        for card in full_deck() {
            let holders = Seat::ALL
                .iter()
                .filter(|&&seat| self.hand(seat).has_card(card))
                .count();
            match holders {
                0 => return Err(DealError::Missing(card)),
                1 => {}
                _ => return Err(DealError::Duplicate(card)),
            }
        }
        Ok(())
    }

    /// Exchange cards before play. `passes` is indexed by seat; every seat's
    /// cards go to `direction.target(seat)`. Returns a new deal and leaves
    /// this one untouched.
    pub fn exchange(
        &self,
        direction: PassDirection,
        passes: &[[Card; 3]; 4],
    ) -> Result<Deal, DealError> {
        if direction == PassDirection::Hold {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        for seat in Seat::ALL {
            for &card in &passes[seat.index()] {
                if !next.hand_mut(seat).remove_card(card) {
                    return Err(DealError::PassNotHeld { seat, card });
                }
            }
        }
        for seat in Seat::ALL {
            let target = direction.target(seat);
            for &card in &passes[seat.index()] {
                next.hand_mut(target).add_card(card);
            }
        }
        Ok(next)
    }
}

/// Generator for random deals
pub struct DealGenerator {
    rng: StdRng,
}

impl DealGenerator {
    /// Create a new deal generator with a given seed
    pub fn new(seed: u64) -> Self {
        DealGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffle a fresh deck and deal it out.
    /// The first 13 cards go to North, the next 13 to East, then South, then West.
    pub fn generate(&mut self) -> Deal {
        let mut deck = full_deck();
        deck.shuffle(&mut self.rng);

        let mut deal = Deal::new();
        for (seat, chunk) in Seat::ALL.iter().zip(deck.chunks(HAND_SIZE)) {
            *deal.hand_mut(*seat) = Hand::from_cards(chunk.iter().copied());
        }
        deal
    }

    /// Generate multiple deals
    pub fn generate_many(&mut self, count: usize) -> Vec<Deal> {
        (0..count).map(|_| self.generate()).collect()
    }
}
