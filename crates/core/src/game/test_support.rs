//! Shared fixtures for the `game` submodule test suites.
//! This module exists to build hand-drawn floors without running the generator.
//! It does not own production gameplay logic.

use super::*;

/// Builds a game on a hand-drawn floor. `T` is a trap, `P` the player, `E`
/// the exit (bottom-right corner when absent); anything else is a safe cell.
/// Nothing is revealed.
pub(super) fn game_from_rows(rows: &[&str]) -> Game {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut grid = Grid::new(height, width);
    let mut player = Pos::new(0, 0);
    let mut exit = Pos::new(height as i32 - 1, width as i32 - 1);

    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged fixture row {r}");
        for (c, symbol) in row.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            match symbol {
                'T' => grid.place_trap(pos),
                'P' => player = pos,
                'E' => exit = pos,
                _ => {}
            }
        }
    }
    grid.recalculate_numbers();

    let mut game = Game::new(7);
    game.grid = grid;
    game.player.pos = player;
    game.exit = exit;
    game
}

/// Like [`game_from_rows`], with the opening reveal from the player applied.
pub(super) fn started_game(rows: &[&str]) -> Game {
    let mut game = game_from_rows(rows);
    game.reveal_from(game.player.pos);
    game
}

pub(super) fn give(game: &mut Game, items: &[ItemId]) {
    game.player.inventory.extend_from_slice(items);
}

pub(super) fn place_item(game: &mut Game, pos: Pos, id: ItemId) {
    game.grid.cell_mut(pos).item = Some(id);
}

pub(super) fn input(game: &mut Game, token: &str) -> Option<EngineAction> {
    game.handle_input(token)
}
