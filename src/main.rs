use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fivetwelve::{Board, Direction, GameEvent, Observer};

#[derive(Parser)]
#[command(about = "play a random game of fivetwelve and print the result")]
struct Cli {
    #[arg(long, default_value_t = 4)]
    rows: usize,

    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// RNG seed; picked at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// maximum number of moves to play
    #[arg(long, default_value_t = 1000)]
    moves: usize,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

/// Logs every board change; stands in for the view layer.
struct EventLogger;

impl Observer for EventLogger {
    fn notify(&mut self, event: &GameEvent) {
        log::debug!("{}", event);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(std::io::stderr())
        .apply()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut board = Board::new(cli.rows, cli.cols, StdRng::seed_from_u64(rng.gen()))?;
    board.add_observer(Rc::new(RefCell::new(EventLogger)));
    board.place_random_tile(None)?;

    let directions = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
    let mut played = 0;
    for _ in 0..cli.moves {
        let direction = directions[rng.gen_range(0..directions.len())];
        log::debug!("moving {}", direction);
        board.shift(direction);
        played += 1;
        if !board.has_empty() {
            log::info!("board full after {} moves", played);
            break;
        }
        board.place_random_tile(None)?;
    }

    println!("{}", board);
    println!("score after {} moves: {}", played, board.score());

    Ok(())
}
