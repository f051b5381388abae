use crate::deal::format_deal;
use chrono::{Datelike, Local};
use hearts_core::{points_taken, Board, Deal, Hand, Seat, Suit, Trick, TWO_OF_CLUBS};

/// Format a hand on one line with suit symbols, ranks ascending
///
/// Example output:
/// ```text
/// ♠68 ♥56K ♦248 ♣23479
/// ```
/// A void suit is shown as a dash.
pub fn format_hand(hand: &Hand) -> String {
    let suits: Vec<String> = Suit::ALL
        .iter()
        .map(|&suit| {
            let holding = hand.holding(suit);
            let ranks: String = if holding.is_empty() {
                "-".to_string()
            } else {
                holding.iter().map(|c| c.rank.to_char()).collect()
            };
            format!("{}{}", suit.symbol(), ranks)
        })
        .collect();
    suits.join(" ")
}

/// Format the plays of a trick in order, e.g. "N:2C E:QC S:6C W:KC"
pub fn format_trick(trick: &Trick) -> String {
    let plays: Vec<String> = trick
        .plays
        .iter()
        .map(|p| format!("{}:{}", p.seat, p.card))
        .collect();
    plays.join(" ")
}

/// Format a board for debugging: remaining hands, the trick in progress, and
/// points taken so far
///
/// Example output:
/// ```text
/// Trick 1, W to play
///   N ♠68 ♥56K ♦248 ♣3479
///   E ♠39K ♥279QA ♦57KA ♣-
///   S ♠7TJQ ♥4TJ ♦69TQ ♣A
///   W ♠245A ♥38 ♦3J ♣58TJK
/// Current: N:2C E:QC S:6C
/// Points: N 0, E 0, S 0, W 0
/// ```
pub fn format_board(board: &Board) -> String {
    let mut result = String::new();

    match board.current_play() {
        Some(current) => result.push_str(&format!(
            "Trick {}, {} to play\n",
            board.completed_tricks().len() + 1,
            current.player
        )),
        None => result.push_str(&format!(
            "Complete after {} tricks\n",
            board.completed_tricks().len()
        )),
    }

    for seat in Seat::ALL {
        result.push_str(&format!("  {} {}\n", seat, format_hand(board.hand(seat))));
    }

    if let Some(current) = board.current_play() {
        if !current.trick.is_empty() {
            result.push_str(&format!("Current: {}\n", format_trick(&current.trick)));
        }
    }

    result.push_str(&format!("Points: {}\n", format_points(board)));
    result
}

/// Format a played-out deal as a PBN-style record
///
/// This includes:
/// - Event, Site, Date
/// - Board number and opening leader
/// - The opening deal
/// - One line per completed trick, winner first
/// - Points taken per seat
pub fn format_game_record(
    deal: &Deal,
    board: &Board,
    board_number: usize,
    event_name: Option<&str>,
    seed: Option<u64>,
) -> String {
    let mut result = String::new();

    // Event tag - title takes precedence over seed
    if let Some(title) = event_name {
        result.push_str(&format!("[Event \"{}\"]\n", title));
    } else {
        let mut event = String::from("Deal played by hearts");
        if let Some(seed_val) = seed {
            event.push_str(&format!(", seed {}", seed_val));
        }
        result.push_str(&format!("[Event \"{}\"]\n", event));
    }

    result.push_str("[Site \"-\"]\n");

    // Current date in PBN format (YYYY.MM.DD)
    let now = Local::now();
    result.push_str(&format!(
        "[Date \"{:04}.{:02}.{:02}\"]\n",
        now.year(),
        now.month(),
        now.day()
    ));

    result.push_str(&format!("[Board \"{}\"]\n", board_number + 1));

    // The holder of the two of clubs opens
    if let Some(leader) = deal.find_card(TWO_OF_CLUBS) {
        result.push_str(&format!("[Leader \"{}\"]\n", leader));
    }

    result.push_str(&format!("[Deal \"{}\"]\n", format_deal(deal, Seat::North)));

    for (i, complete) in board.completed_tricks().iter().enumerate() {
        result.push_str(&format!(
            "{:2}. {} {}\n",
            i + 1,
            complete.winner,
            format_trick(&complete.trick)
        ));
    }

    result.push_str(&format!("[Points \"{}\"]\n", format_points(board)));
    result.push('\n');

    result
}

/// Points taken so far, e.g. "N 0, E 13, S 4, W 9"
pub fn format_points(board: &Board) -> String {
    let points = points_taken(board);
    let parts: Vec<String> = Seat::ALL
        .iter()
        .map(|&seat| format!("{} {}", seat, points[seat.index()]))
        .collect();
    parts.join(", ")
}
