use clap::{Parser, ValueEnum};
use hearts_core::{points_taken, Board, CompleteTrick, Deal, DealGenerator, PassDirection, Seat};
use hearts_pbn::{
    format_deal, format_game_record, format_hand, format_points, format_trick, parse_deal,
    ParseError,
};
use hearts_strategy::{exchange_passes, play_out, BasicStrategy, StrategyError};
use log::{debug, info};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "hearts")]
#[command(about = "Deal Hearts hands and play them out with a rule-based strategy", long_about = None)]
struct Args {
    /// Number of deals to play
    #[arg(short = 'p', long = "produce", default_value = "1")]
    produce: usize,

    /// Random seed for dealing (defaults to current time)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Pass direction before play; "rotate" cycles left, right, across, hold
    #[arg(long = "pass", value_enum, default_value_t = PassArg::Hold)]
    pass: PassArg,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Play this deal (e.g. "N:68.56K.248.23479 ...") instead of a random one
    #[arg(long = "deal")]
    deal: Option<String>,

    /// Event title for PBN records (defaults to one naming the seed)
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Log strategy decisions and trick results
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PassArg {
    Left,
    Right,
    Across,
    Hold,
    Rotate,
}

impl PassArg {
    fn direction(self, deal_number: usize) -> PassDirection {
        match self {
            PassArg::Left => PassDirection::Left,
            PassArg::Right => PassDirection::Right,
            PassArg::Across => PassDirection::Across,
            PassArg::Hold => PassDirection::Hold,
            PassArg::Rotate => PassDirection::for_deal_number(deal_number),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Pbn,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid deal: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid deal: {0}")]
    Deal(#[from] hearts_core::DealError),

    #[error(transparent)]
    Rules(#[from] hearts_core::Error),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One played deal, as written by `--format json`
#[derive(Serialize)]
struct DealRecord<'a> {
    board: usize,
    seed: Option<u64>,
    pass: PassDirection,
    deal: String,
    tricks: &'a [CompleteTrick],
    points: [u32; 4],
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    );

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let strategy = BasicStrategy::new();

    // A given deal is played once; otherwise deal from the seed
    let (deals, seed) = match &args.deal {
        Some(text) => {
            let deal = parse_deal(text)?.deal;
            deal.validate()?;
            (vec![deal], None)
        }
        None => {
            // Microsecond clock keeps back-to-back runs apart
            let seed = args.seed.unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_micros() as u64)
                    .unwrap_or_default()
            });
            info!("dealing {} boards with seed {}", args.produce, seed);
            (DealGenerator::new(seed).generate_many(args.produce), Some(seed))
        }
    };

    for (number, deal) in deals.iter().enumerate() {
        let direction = args.pass.direction(number);
        let deal = exchange_passes(deal, direction, &strategy)?;
        debug!(
            "board {} after passing {:?}: {}",
            number + 1,
            direction,
            format_deal(&deal, Seat::North)
        );

        let board = Board::new(deal.clone())?;
        let done = play_out(&board, &strategy)?;
        let points = points_taken(&done);
        info!("board {}: {}", number + 1, format_points(&done));

        match args.format {
            Format::Text => print!("{}", format_text(&deal, &done, number, direction)),
            Format::Pbn => print!(
                "{}",
                format_game_record(&deal, &done, number, args.title.as_deref(), seed)
            ),
            Format::Json => {
                let record = DealRecord {
                    board: number + 1,
                    seed,
                    pass: direction,
                    deal: format_deal(&deal, Seat::North),
                    tricks: done.completed_tricks(),
                    points,
                };
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    }

    Ok(())
}

/// Hands as dealt for play, then one line per trick and the points
fn format_text(deal: &Deal, done: &Board, number: usize, direction: PassDirection) -> String {
    let mut result = format!("Board {}, pass {:?}\n", number + 1, direction);
    for seat in Seat::ALL {
        result.push_str(&format!("  {} {}\n", seat, format_hand(deal.hand(seat))));
    }
    for (i, complete) in done.completed_tricks().iter().enumerate() {
        result.push_str(&format!(
            "{:2}. {} {}\n",
            i + 1,
            complete.winner,
            format_trick(&complete.trick)
        ));
    }
    result.push_str(&format!("Points: {}\n\n", format_points(done)));
    result
}
