use crate::StrategyError;
use hearts_core::{
    game_state, legal_plays, Board, Card, CurrentPlay, Deal, GameState, Hand, PassDirection,
    PlayType, PlayedCard, Seat, TWO_OF_CLUBS,
};
use log::debug;

/// A policy for passing and playing cards.
///
/// Every method receives the acting seat's full hand. Play methods also get
/// the trick in progress, public game state, and the legal candidates, and
/// must return one of those candidates.
pub trait Strategy {
    /// Choose three cards to pass before play begins.
    fn pass(&self, hand: &Hand, seat: Seat) -> Result<[Card; 3], StrategyError>;

    /// Choose a card to open a trick.
    fn lead(
        &self,
        hand: &Hand,
        current: &CurrentPlay,
        state: &GameState,
        candidates: &Hand,
    ) -> Result<Card, StrategyError>;

    /// Choose a card of the suit led. `candidates` is sorted ascending by rank.
    fn follow(
        &self,
        hand: &Hand,
        current: &CurrentPlay,
        state: &GameState,
        candidates: &[Card],
    ) -> Result<Card, StrategyError>;

    /// Choose a card when unable to follow suit.
    fn discard(
        &self,
        hand: &Hand,
        current: &CurrentPlay,
        state: &GameState,
        candidates: &Hand,
    ) -> Result<Card, StrategyError>;
}

/// Decide the next play on a board.
///
/// When only one card is legal it is played without consulting the strategy.
/// The board itself is not advanced; apply the result with [`Board::play`].
pub fn make_play<S: Strategy + ?Sized>(
    board: &Board,
    strategy: &S,
) -> Result<PlayedCard, StrategyError> {
    let current = board
        .current_play()
        .ok_or(hearts_core::Error::BoardComplete)?;
    let seat = current.player;
    let candidates = legal_plays(board)?;

    if candidates.is_empty() {
        return Err(StrategyError::NoCandidates(seat));
    }
    if candidates.len() == 1 {
        if let Some(card) = candidates.cards().next() {
            debug!("{} plays {} (only legal card)", seat, card);
            return Ok(PlayedCard { seat, card });
        }
    }

    let state = game_state(board);
    let hand = board.hand(seat);
    let play_type = board
        .play_type()
        .ok_or(hearts_core::Error::BoardComplete)?;
    let card = match play_type {
        PlayType::Lead => strategy.lead(hand, current, &state, &candidates)?,
        PlayType::OnSuit => {
            let mut sorted: Vec<Card> = candidates.cards().collect();
            sorted.sort_by_key(|c| c.rank);
            strategy.follow(hand, current, &state, &sorted)?
        }
        PlayType::OffSuit => strategy.discard(hand, current, &state, &candidates)?,
    };

    if !candidates.has_card(card) {
        return Err(StrategyError::IllegalChoice { seat, card });
    }
    debug!("{} plays {} ({:?})", seat, card, play_type);
    Ok(PlayedCard { seat, card })
}

/// Play a board to completion, every seat using the same strategy.
pub fn play_out<S: Strategy + ?Sized>(board: &Board, strategy: &S) -> Result<Board, StrategyError> {
    let mut board = board.clone();
    while !board.is_complete() {
        let play = make_play(&board, strategy)?;
        board = board.play(play.card)?;
    }
    Ok(board)
}

/// Run the pre-play exchange: every seat asks the strategy for three cards
/// and they move to `direction.target(seat)` together.
pub fn exchange_passes<S: Strategy + ?Sized>(
    deal: &Deal,
    direction: PassDirection,
    strategy: &S,
) -> Result<Deal, StrategyError> {
    if direction == PassDirection::Hold {
        return Ok(deal.clone());
    }

    let mut passes = [[TWO_OF_CLUBS; 3]; 4];
    for seat in Seat::ALL {
        let cards = strategy.pass(deal.hand(seat), seat)?;
        debug!(
            "{} passes {} {} {} to {}",
            seat,
            cards[0],
            cards[1],
            cards[2],
            direction.target(seat)
        );
        passes[seat.index()] = cards;
    }

    Ok(deal.exchange(direction, &passes)?)
}
