use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use trapwalk_core::{Game, Mode};

const TOKENS: [&str; 29] = [
    "up", "down", "left", "right", "up_left", "up_right", "down_left", "down_right", "w", "a", "s",
    "d", "yes", "no", "1", "2", "3", "4", "r", "t", "e", "j", "c", "g", "x", "p", "k", "?", "",
];

fn choose<'a>(rng: &mut ChaCha8Rng, slice: &[&'a str]) -> &'a str {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(game: &Game, seed: u64) -> Result<(), String> {
    let grid = game.grid();
    let pos = game.player().pos;
    if !grid.in_bounds(pos) {
        return Err(format!("seed {seed}: player outside the floor at {pos:?}"));
    }
    let over = *game.mode() == Mode::GameOver;
    if !over && grid.is_trap(pos) {
        return Err(format!("seed {seed}: player alive on a trap at {pos:?}"));
    }
    if !over && !grid.cell(pos).is_revealed {
        return Err(format!("seed {seed}: player cell {pos:?} unrevealed"));
    }
    if grid.is_trap(game.exit()) {
        return Err(format!("seed {seed}: exit became a trap"));
    }
    for (cell_pos, cell) in grid.cells() {
        if cell.is_revealed && cell.is_flagged {
            return Err(format!("seed {seed}: {cell_pos:?} is revealed and flagged"));
        }
        if !cell.is_trap && cell.adjacent_traps != grid.count_adjacent_traps(cell_pos) {
            return Err(format!("seed {seed}: stale count at {cell_pos:?}"));
        }
    }
    Ok(())
}

fn run_token_stream(seed: u64, token_seed: u64, steps: usize) -> Result<(), String> {
    let mut game = Game::new(seed);
    game.setup_floor();
    let mut rng = ChaCha8Rng::seed_from_u64(token_seed);
    check_invariants(&game, seed)?;

    for _ in 0..steps {
        let floor = game.floor();
        let turn = game.turn();
        let traps = game.grid().trap_count();

        game.step(choose(&mut rng, &TOKENS));
        check_invariants(&game, seed)?;

        if game.floor() == floor {
            if game.turn() > turn + 1 {
                return Err(format!("seed {seed}: one token advanced {} turns", game.turn() - turn));
            }
            if game.grid().trap_count() > traps {
                return Err(format!("seed {seed}: trap count grew within a floor"));
            }
        } else if game.floor() != floor + 1 || game.turn() != 0 {
            return Err(format!("seed {seed}: floor jumped from {floor} to {}", game.floor()));
        }
        if *game.mode() == Mode::GameOver {
            break;
        }
    }
    Ok(())
}

#[test]
fn random_token_streams_preserve_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(24));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(seed, token_seed)| {
            run_token_stream(seed, token_seed, 400).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random token streams should preserve invariants");
}
