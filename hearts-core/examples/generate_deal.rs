use hearts_core::{points_for_card, DealGenerator, Seat, Suit, QUEEN_OF_SPADES, TWO_OF_CLUBS};

fn main() {
    let mut generator = DealGenerator::new(1);
    let deal = generator.generate();

    println!("Hearts Deal (Seed: 1)");
    println!("=====================\n");

    for seat in Seat::ALL {
        let hand = deal.hand(seat);
        let points: u32 = hand.cards().map(points_for_card).sum();
        println!(
            "{}: {} cards, {} points held, shortest suit: {}",
            seat,
            hand.len(),
            points,
            hand.shortest_suit().map_or('-', |suit| suit.to_char())
        );

        // Print cards by suit
        for suit in Suit::ALL {
            let holding = hand.holding(suit);
            if !holding.is_empty() {
                print!("  {} ", suit.symbol());
                for card in holding {
                    print!("{}", card.rank.to_char());
                }
                println!();
            }
        }
        println!();
    }

    if let Some(leader) = deal.find_card(TWO_OF_CLUBS) {
        println!("{} leads the {}", leader, TWO_OF_CLUBS);
    }
    if let Some(holder) = deal.find_card(QUEEN_OF_SPADES) {
        println!("{} holds the {}", holder, QUEEN_OF_SPADES);
    }
}
