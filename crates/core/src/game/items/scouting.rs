//! Area scans around the player.

use super::*;
use crate::topology::neighbors8;

/// Flags traps among the eight surrounding cells and reveals the rest.
pub struct RevealNeighborTraps;

impl ItemEffect for RevealNeighborTraps {
    fn apply(&self, game: &mut Game) -> EffectResult {
        let around = neighbors8(game.player.pos, game.grid.rows(), game.grid.cols());
        scan(game, around)
    }
}

/// Same as [`RevealNeighborTraps`] over the 5x5 square centred on the player.
pub struct RevealWideArea;

impl ItemEffect for RevealWideArea {
    fn apply(&self, game: &mut Game) -> EffectResult {
        let center = game.player.pos;
        let area: Vec<Pos> = (-2..=2)
            .flat_map(|dr| (-2..=2).map(move |dc| center.offset(dr, dc)))
            .filter(|pos| game.grid.in_bounds(*pos))
            .collect();
        scan(game, area)
    }
}

fn scan(game: &mut Game, cells: Vec<Pos>) -> EffectResult {
    let mut disclosed = false;
    for pos in cells {
        disclosed |= game.expose(pos);
    }
    if disclosed { EffectResult::consumed() } else { EffectResult::declined() }
}

#[cfg(test)]
mod tests {
    use crate::game::test_support::{give, input, started_game};
    use super::*;

    #[test]
    fn clairvoyance_flags_adjacent_traps_without_revealing_them() {
        let mut game = started_game(&[
            "T.T...", //
            ".P....",
            "......",
            "......",
            "......",
            ".....E",
        ]);
        give(&mut game, &[ItemId::RevealOneTrap]);

        input(&mut game, "r");
        for trap in [Pos::new(0, 0), Pos::new(0, 2)] {
            let cell = game.grid().cell(trap);
            assert!(cell.is_flagged && !cell.is_revealed);
        }
        assert!(game.grid().cell(Pos::new(0, 1)).is_revealed);
        assert!(game.player().inventory.is_empty());
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn clairvoyance_is_declined_silently_when_nothing_is_new() {
        let mut game = started_game(&[
            "P.....", //
            "......",
            "......",
            "......",
            "......",
            ".....E",
        ]);
        give(&mut game, &[ItemId::RevealOneTrap]);

        input(&mut game, "r");
        assert_eq!(game.player().inventory, vec![ItemId::RevealOneTrap]);
        assert!(game.last_action_message().is_none());
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn philosophers_stone_covers_a_five_by_five_square() {
        let mut game = started_game(&[
            "......", //
            ".TTT..",
            ".TPT..",
            ".TTT..",
            "......",
            ".....E",
        ]);
        give(&mut game, &[ItemId::PhilosophersStone]);

        input(&mut game, "p");
        for r in 0..=4 {
            for c in 0..=4 {
                let cell = game.grid().cell(Pos::new(r, c));
                if cell.is_trap {
                    assert!(cell.is_flagged, "trap at ({r},{c}) should be flagged");
                } else {
                    assert!(cell.is_revealed, "({r},{c}) should be revealed");
                }
            }
        }
        assert!(!game.grid().cell(Pos::new(5, 5)).is_revealed);
        assert!(game.player().inventory.is_empty());
    }
}
