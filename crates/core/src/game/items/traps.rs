//! Items that rewrite trap placement.

use std::collections::HashSet;

use super::*;
use crate::random::shuffle;
use crate::topology::neighbors8;

const NO_TRAP_NEARBY: Text =
    Text::fixed("解除対象の罠は存在しない。", "No trap within 8 squares of the player.");

/// Disarms one random trap among the player's eight neighbours.
pub struct DisarmNearbyTrap;

impl ItemEffect for DisarmNearbyTrap {
    fn apply(&self, game: &mut Game) -> EffectResult {
        let nearby: Vec<Pos> = neighbors8(game.player.pos, game.grid.rows(), game.grid.cols())
            .into_iter()
            .filter(|pos| game.grid.is_trap(*pos))
            .collect();
        let Some(target) = choose(&mut game.rng, &nearby) else {
            return EffectResult::declined_with(NO_TRAP_NEARBY);
        };

        let cell = game.grid.cell_mut(target);
        cell.is_trap = false;
        cell.is_flagged = false;
        game.grid.recalculate_numbers();
        debug!(?target, "trap disarmed");
        EffectResult::consumed()
    }
}

/// Redistributes the traps hidden in unexplored territory. The exit, item
/// cells, and their neighbours keep their current contents.
pub struct ShuffleTraps;

impl ItemEffect for ShuffleTraps {
    fn apply(&self, game: &mut Game) -> EffectResult {
        let (rows, cols) = (game.grid.rows(), game.grid.cols());
        let mut protected: HashSet<Pos> = HashSet::new();
        for (pos, cell) in game.grid.cells() {
            if pos == game.exit || cell.item.is_some() {
                protected.insert(pos);
                protected.extend(neighbors8(pos, rows, cols));
            }
        }

        let mut pool: Vec<Pos> = game
            .grid
            .cells()
            .filter(|(pos, cell)| !cell.is_revealed && !cell.is_flagged && !protected.contains(pos))
            .map(|(pos, _)| pos)
            .collect();
        let displaced = pool.iter().filter(|pos| game.grid.is_trap(**pos)).count();
        for pos in &pool {
            game.grid.cell_mut(*pos).is_trap = false;
        }

        shuffle(&mut game.rng, &mut pool);
        for pos in pool.iter().take(displaced) {
            game.grid.cell_mut(*pos).is_trap = true;
        }
        game.grid.recalculate_numbers();
        debug!(displaced, candidates = pool.len(), "traps shuffled");
        EffectResult::consumed()
    }
}
