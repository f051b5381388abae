use crate::{Strategy, StrategyError};
use hearts_core::{
    points_for_trick, Card, CurrentPlay, GameState, Hand, Rank, Seat, Suit, QUEEN_OF_SPADES,
};
use log::trace;

/// A simple rule-based player.
///
/// Passes dangerous cards, flushes out the queen of spades when it's still
/// at large, ducks under the winning card when it can, and dumps penalty
/// cards when void.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        BasicStrategy
    }
}

/// Higher means more eager to pass
fn pass_score(card: Card, shortest: Option<Suit>) -> u32 {
    if card == QUEEN_OF_SPADES {
        return 1000;
    }
    if card.suit == Suit::Spades && card.rank > Rank::Queen {
        return 500;
    }
    let mut score = u32::from(card.rank.value());
    if Some(card.suit) == shortest {
        score += 50;
    }
    if card.suit == Suit::Hearts {
        score += 100;
    }
    score
}

/// Lower means more eager to lead
fn lead_score(card: Card, shortest: Option<Suit>) -> i32 {
    let mut score = i32::from(card.rank.value()) * 10;
    if Some(card.suit) == shortest {
        score -= 1;
    }
    score
}

impl Strategy for BasicStrategy {
    fn pass(&self, hand: &Hand, seat: Seat) -> Result<[Card; 3], StrategyError> {
        let shortest = hand.shortest_suit();
        let mut scored: Vec<(u32, Card)> = hand
            .cards()
            .map(|card| (pass_score(card, shortest), card))
            .collect();
        // Stable, so ties keep canonical order
        scored.sort_by_key(|&(score, _)| score);

        let n = scored.len();
        if n < 3 {
            return Err(StrategyError::NotEnoughCards { seat, held: n });
        }
        Ok([scored[n - 3].1, scored[n - 2].1, scored[n - 1].1])
    }

    fn lead(
        &self,
        hand: &Hand,
        current: &CurrentPlay,
        state: &GameState,
        candidates: &Hand,
    ) -> Result<Card, StrategyError> {
        // Smoke out the queen with a spade she would have to beat
        if !state.is_queen_played && !hand.has_card(QUEEN_OF_SPADES) {
            if let Some(card) = candidates.highest_below(Suit::Spades, Rank::Queen) {
                trace!("{} leads {} to hunt the queen", current.player, card);
                return Ok(card);
            }
        }

        let shortest = hand.shortest_suit();
        candidates
            .cards()
            .min_by_key(|&card| lead_score(card, shortest))
            .ok_or(StrategyError::NoCandidates(current.player))
    }

    fn follow(
        &self,
        _hand: &Hand,
        current: &CurrentPlay,
        _state: &GameState,
        candidates: &[Card],
    ) -> Result<Card, StrategyError> {
        let trick = &current.trick;
        let led = trick.suit_led().ok_or(hearts_core::Error::EmptyTrick)?;
        let lowest = candidates
            .first()
            .copied()
            .ok_or(StrategyError::NoCandidates(current.player))?;

        let high_rank = trick
            .cards()
            .filter(|card| card.suit == led)
            .map(|card| card.rank)
            .max();
        let duck = high_rank.and_then(|high| {
            candidates
                .iter()
                .rev()
                .find(|card| card.rank < high)
                .copied()
        });
        let highest = candidates
            .iter()
            .rev()
            .find(|&&card| card != QUEEN_OF_SPADES)
            .copied();

        // Last to play on a clean trick: win it with the biggest card
        if trick.len() == 3 && points_for_trick(trick) == 0 {
            if let Some(card) = highest {
                return Ok(card);
            }
        }
        Ok(duck.unwrap_or(lowest))
    }

    fn discard(
        &self,
        hand: &Hand,
        current: &CurrentPlay,
        _state: &GameState,
        candidates: &Hand,
    ) -> Result<Card, StrategyError> {
        if candidates.has_card(QUEEN_OF_SPADES) {
            return Ok(QUEEN_OF_SPADES);
        }
        if let Some(card) = candidates.highest_in_suit(Suit::Hearts) {
            return Ok(card);
        }

        // High cards first, preferring suits without a low card to fall back on
        let mut best: Option<(i32, Card)> = None;
        for card in candidates.cards() {
            let low = hand
                .lowest_in_suit(card.suit)
                .map_or(0, |c| i32::from(c.rank.value()));
            let score = i32::from(card.rank.value()) * 100 - low;
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, card));
            }
        }
        best.map(|(_, card)| card)
            .ok_or(StrategyError::NoCandidates(current.player))
    }
}
