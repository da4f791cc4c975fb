use anyhow::{Result, ensure};
use clap::Parser;
use game_core::{Game, Mode};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::io;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

const TOKENS: [&str; 26] = [
    "up", "down", "left", "right", "up_left", "up_right", "down_left", "down_right", "yes", "no",
    "1", "2", "3", "r", "t", "e", "j", "c", "g", "x", "p", "k", "w", "a", "s", "d",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    steps: u32,
    /// Start a new run from floor one whenever the current one ends
    #[arg(long)]
    restart: bool,
}

fn choose<'a>(rng: &mut ChaCha8Rng, slice: &[&'a str]) -> &'a str {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(game: &Game) -> Result<()> {
    let grid = game.grid();
    let pos = game.player().pos;
    ensure!(grid.in_bounds(pos), "player outside the floor at {pos:?}");
    if *game.mode() != Mode::GameOver {
        ensure!(!grid.is_trap(pos), "player alive on a trap at {pos:?}");
        ensure!(grid.cell(pos).is_revealed, "player cell {pos:?} unrevealed");
    }
    for (cell_pos, cell) in grid.cells() {
        ensure!(!(cell.is_revealed && cell.is_flagged), "{cell_pos:?} revealed and flagged");
        if !cell.is_trap {
            ensure!(
                cell.adjacent_traps == grid.count_adjacent_traps(cell_pos),
                "stale count at {cell_pos:?}"
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} steps...", args.seed, args.steps);
    let mut game = Game::new(args.seed);
    game.setup_floor();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut deepest = game.floor();

    for step in 0..args.steps {
        let token = choose(&mut rng, &TOKENS);
        let result = game.step(token);
        check_invariants(&game)?;
        deepest = deepest.max(game.floor());

        if result.is_game_over() {
            info!(step, floor = game.floor(), turn = game.turn(), "run ended");
            if !args.restart {
                break;
            }
            game.reset_game();
            game.setup_floor();
        }
    }

    println!("Fuzzing completed successfully. Deepest floor: {deepest}");
    Ok(())
}
