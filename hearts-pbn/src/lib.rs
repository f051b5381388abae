mod card;
mod deal;
mod error;
mod formatters;

pub use card::{format_card, parse_card};
pub use deal::{format_deal, format_deal_tag, format_hand_pbn, parse_deal, parse_deal_tag, PbnDeal};
pub use error::ParseError;
pub use formatters::{
    format_board, format_game_record, format_hand, format_points, format_trick,
};
