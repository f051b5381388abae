use crate::ParseError;
use hearts_core::{Card, Rank, Suit};

/// Parse a 2-character card code: rank then suit (e.g. "QS", "TH", "2C")
pub fn parse_card(text: &str) -> Result<Card, ParseError> {
    let mut chars = text.chars();
    let (rank_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(s), None) => (r, s),
        _ => return Err(ParseError::CardLength(text.to_string())),
    };

    let rank = Rank::from_char(rank_char).ok_or(ParseError::Rank(rank_char))?;
    let suit = Suit::from_char(suit_char).ok_or(ParseError::Suit(suit_char))?;
    Ok(Card::new(suit, rank))
}

/// Format a card as its 2-character code
pub fn format_card(card: Card) -> String {
    card.to_string()
}
