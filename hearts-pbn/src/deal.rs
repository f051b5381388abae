use crate::ParseError;
use hearts_core::{Card, Deal, Hand, Rank, Seat, Suit};

/// A deal together with the seat whose hand is written first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbnDeal {
    pub first_seat: Seat,
    pub deal: Deal,
}

/// Parse a deal in PBN notation.
/// Format: "N:68.56K.248.23479 39K.279QA.57KA.Q 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK"
/// Seat:Spades.Hearts.Diamonds.Clubs for each hand (clockwise from that seat)
pub fn parse_deal(input: &str) -> Result<PbnDeal, ParseError> {
    let hands_str: Vec<&str> = input.split_whitespace().collect();
    if hands_str.len() != 4 {
        return Err(ParseError::HandCount(hands_str.len()));
    }

    // The first group carries the "N:" style seat marker
    let (first_seat, first_hand) = parse_seat_prefix(hands_str[0])?;

    let mut deal = Deal::new();
    for (i, hand_str) in hands_str.iter().enumerate() {
        let seat = first_seat.offset(i);
        let hand_str = if i == 0 { first_hand } else { hand_str };
        *deal.hand_mut(seat) = parse_hand(seat, hand_str)?;
    }

    Ok(PbnDeal { first_seat, deal })
}

/// Format a deal in PBN notation, hands clockwise from `first_seat`
pub fn format_deal(deal: &Deal, first_seat: Seat) -> String {
    let hands: Vec<String> = (0..4)
        .map(|i| format_hand_pbn(deal.hand(first_seat.offset(i))))
        .collect();
    format!("{}:{}", first_seat.to_char(), hands.join(" "))
}

/// Parse a PBN [Deal "..."] tag
pub fn parse_deal_tag(input: &str) -> Result<PbnDeal, ParseError> {
    let content = input
        .trim()
        .strip_prefix("[Deal \"")
        .and_then(|rest| rest.strip_suffix("\"]"))
        .ok_or(ParseError::Tag)?;
    parse_deal(content)
}

/// Format a Deal as a PBN [Deal "..."] tag
pub fn format_deal_tag(deal: &Deal, first_seat: Seat) -> String {
    format!("[Deal \"{}\"]", format_deal(deal, first_seat))
}

/// Format a single hand (without seat prefix), ranks ascending within a suit.
/// Returns a string like "68.56K.248.23479"; a void is an empty group.
pub fn format_hand_pbn(hand: &Hand) -> String {
    let suits: Vec<String> = Suit::ALL
        .iter()
        .map(|&suit| hand.holding(suit).iter().map(|c| c.rank.to_char()).collect())
        .collect();
    suits.join(".")
}

/// Split "N:..." into the seat and the rest of the group
fn parse_seat_prefix(group: &str) -> Result<(Seat, &str), ParseError> {
    let mut chars = group.chars();
    match (chars.next().and_then(Seat::from_char), chars.next()) {
        (Some(seat), Some(':')) => Ok((seat, chars.as_str())),
        _ => Err(ParseError::MissingSeat),
    }
}

/// Parse a hand in PBN format: Spades.Hearts.Diamonds.Clubs
fn parse_hand(seat: Seat, s: &str) -> Result<Hand, ParseError> {
    let suits_str: Vec<&str> = s.split('.').collect();
    if suits_str.len() != 4 {
        return Err(ParseError::SuitCount {
            seat,
            count: suits_str.len(),
            hand: s.to_string(),
        });
    }

    let mut hand = Hand::new();
    for (&suit, suit_str) in Suit::ALL.iter().zip(suits_str) {
        for c in suit_str.chars() {
            let rank = Rank::from_char(c).ok_or(ParseError::Rank(c))?;
            let card = Card::new(suit, rank);
            if hand.has_card(card) {
                return Err(ParseError::DuplicateCard { seat, card });
            }
            hand.add_card(card);
        }
    }

    Ok(hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearts_core::DealGenerator;

    const DEAL: &str = "N:68.56K.248.23479 39K.279QA.57KA.Q 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK";

    #[test]
    fn test_parse_deal() {
        let pbn_deal = parse_deal(DEAL).unwrap();

        assert_eq!(pbn_deal.first_seat, Seat::North);
        let north = pbn_deal.deal.hand(Seat::North);
        assert_eq!(north.len(), 13);
        assert_eq!(north.suit_lengths(), [2, 3, 3, 5]);

        let west = pbn_deal.deal.hand(Seat::West);
        assert!(west.has_card(Card::new(Suit::Spades, Rank::Ace)));
        assert_eq!(pbn_deal.deal.validate(), Ok(()));
    }

    #[test]
    fn test_round_trip_is_byte_for_byte() {
        let pbn_deal = parse_deal(DEAL).unwrap();
        assert_eq!(format_deal(&pbn_deal.deal, Seat::North), DEAL);
    }

    #[test]
    fn test_generated_deals_round_trip() {
        let mut gen = DealGenerator::new(5);
        for deal in gen.generate_many(20) {
            let text = format_deal(&deal, Seat::North);
            assert_eq!(parse_deal(&text).unwrap().deal, deal);
        }
    }

    #[test]
    fn test_start_seat_rotates_hands() {
        let text = "S:7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK 68.56K.248.23479 39K.279QA.57KA.Q";
        let pbn_deal = parse_deal(text).unwrap();
        assert_eq!(pbn_deal.first_seat, Seat::South);
        assert_eq!(pbn_deal.deal, parse_deal(DEAL).unwrap().deal);
        assert_eq!(format_deal(&pbn_deal.deal, Seat::South), text);
    }

    #[test]
    fn test_void_suit() {
        let text = "N:AKQJT98765432... .AKQJT98765432.. ..AKQJT98765432. ...AKQJT98765432";
        let pbn_deal = parse_deal(text).unwrap();
        assert_eq!(pbn_deal.deal.hand(Seat::North).suit_lengths(), [13, 0, 0, 0]);
        assert_eq!(pbn_deal.deal.hand(Seat::West).suit_lengths(), [0, 0, 0, 13]);
        assert_eq!(
            format_deal(&pbn_deal.deal, Seat::North),
            "N:23456789TJQKA... .23456789TJQKA.. ..23456789TJQKA. ...23456789TJQKA"
        );
    }

    #[test]
    fn test_deal_tag() {
        let tag = format!("[Deal \"{}\"]", DEAL);
        let pbn_deal = parse_deal_tag(&tag).unwrap();
        assert_eq!(format_deal_tag(&pbn_deal.deal, pbn_deal.first_seat), tag);
        assert_eq!(parse_deal_tag(DEAL), Err(ParseError::Tag));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            parse_deal("N:68.56K.248.23479 39K.279QA.57KA.Q"),
            Err(ParseError::HandCount(2))
        );
        assert_eq!(
            parse_deal("68.56K.248.23479 39K.279QA.57KA.Q 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK"),
            Err(ParseError::MissingSeat)
        );
        assert_eq!(
            parse_deal("X:68.56K.248.23479 39K.279QA.57KA.Q 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK"),
            Err(ParseError::MissingSeat)
        );
        assert_eq!(
            parse_deal("N:68.56K.248.23479 39K.279QA.57KA 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK"),
            Err(ParseError::SuitCount {
                seat: Seat::East,
                count: 3,
                hand: "39K.279QA.57KA".to_string()
            })
        );
        assert_eq!(
            parse_deal("N:68.56K.248.2347X 39K.279QA.57KA.Q 7TJQ.4TJ.69TQ.6A 245A.38.3J.58TJK"),
            Err(ParseError::Rank('X'))
        );
    }

    #[test]
    fn test_repeated_rank_is_rejected() {
        assert_eq!(
            parse_deal("N:AA... 2... 3... 4..."),
            Err(ParseError::DuplicateCard {
                seat: Seat::North,
                card: Card::new(Suit::Spades, Rank::Ace)
            })
        );
        assert_eq!(
            parse_deal("N:A... 2... 3... 4..TT."),
            Err(ParseError::DuplicateCard {
                seat: Seat::West,
                card: Card::new(Suit::Diamonds, Rank::Ten)
            })
        );
    }
}
