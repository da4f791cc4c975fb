//! Items that disclose the exit or the way to it.

use super::*;
use crate::topology::{neighbors8, trace_line};

const EXIT_ALREADY_KNOWN: Text = Text::fixed("出口はすでに判明している。", "The exit is already revealed.");
const EXIT_SURROUNDINGS_KNOWN: Text = Text::fixed(
    "出口の周囲はすべて判明している。",
    "The entire area surrounding the exit is revealed.",
);

pub struct RevealExit;

impl ItemEffect for RevealExit {
    fn apply(&self, game: &mut Game) -> EffectResult {
        if game.grid.cell(game.exit).is_revealed {
            return EffectResult::declined_with(EXIT_ALREADY_KNOWN);
        }
        game.mark_revealed(game.exit);
        game.exit_revealed_this_floor = true;
        EffectResult::consumed()
    }
}

/// Discloses the exit and its eight neighbours.
pub struct RevealExitSurroundings;

impl ItemEffect for RevealExitSurroundings {
    fn apply(&self, game: &mut Game) -> EffectResult {
        let exit = game.exit;
        let mut area = neighbors8(exit, game.grid.rows(), game.grid.cols());
        area.push(exit);

        let anything_hidden = area.iter().any(|pos| {
            let cell = game.grid.cell(*pos);
            !cell.is_revealed && !(cell.is_trap && cell.is_flagged)
        });
        if !anything_hidden {
            return EffectResult::declined_with(EXIT_SURROUNDINGS_KNOWN);
        }

        game.mark_revealed(exit);
        game.exit_revealed_this_floor = true;
        for pos in area {
            game.expose(pos);
        }
        EffectResult::consumed()
    }
}

/// Lays a straight thread from the player to the exit.
pub struct ThreadToExit;

impl ItemEffect for ThreadToExit {
    fn apply(&self, game: &mut Game) -> EffectResult {
        for pos in trace_line(game.player.pos, game.exit) {
            let Some(cell) = game.grid.get_mut(pos) else {
                continue;
            };
            if cell.is_trap {
                if !cell.is_revealed {
                    cell.is_flagged = true;
                }
            } else {
                game.mark_revealed(pos);
            }
        }
        EffectResult::consumed()
    }
}

#[cfg(test)]
mod tests {
    use crate::game::test_support::{give, input, started_game};
    use super::*;

    fn walled_floor() -> Game {
        started_game(&[
            "P.T....", //
            "..T....",
            "TTT....",
            ".......",
            "....T..",
            ".......",
            "......E",
        ])
    }

    #[test]
    fn exit_map_marks_only_the_exit() {
        let mut game = walled_floor();
        give(&mut game, &[ItemId::RevealExit, ItemId::RevealExit]);

        input(&mut game, "e");
        assert!(game.grid().cell(Pos::new(6, 6)).is_revealed);
        assert!(!game.grid().cell(Pos::new(5, 5)).is_revealed);
        assert!(game.exit_revealed_this_floor());

        input(&mut game, "e");
        assert_eq!(game.player().inventory, vec![ItemId::RevealExit]);
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("The exit is already revealed.")
        );
    }

    #[test]
    fn detailed_map_opens_the_exit_neighbourhood_once() {
        let mut game = walled_floor();
        give(&mut game, &[ItemId::DetailedMapOfExit, ItemId::DetailedMapOfExit]);

        input(&mut game, "x");
        for pos in [Pos::new(5, 5), Pos::new(5, 6), Pos::new(6, 5), Pos::new(6, 6)] {
            assert!(game.grid().cell(pos).is_revealed, "{pos:?}");
        }
        assert_eq!(game.player().inventory, vec![ItemId::DetailedMapOfExit]);

        input(&mut game, "x");
        assert_eq!(game.player().inventory, vec![ItemId::DetailedMapOfExit]);
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("The entire area surrounding the exit is revealed.")
        );
    }

    #[test]
    fn thread_reveals_the_line_and_flags_traps_on_it() {
        let mut game = walled_floor();
        give(&mut game, &[ItemId::AriadnesThread]);

        input(&mut game, "g");
        for pos in trace_line(Pos::new(0, 0), Pos::new(6, 6)) {
            let cell = game.grid().cell(pos);
            if cell.is_trap {
                assert!(cell.is_flagged && !cell.is_revealed, "{pos:?}");
            } else {
                assert!(cell.is_revealed, "{pos:?}");
            }
        }
        // The diagonal passes the wall corner at (2,2) and the trap at (4,4).
        assert!(game.grid().cell(Pos::new(2, 2)).is_flagged);
        assert!(game.grid().cell(Pos::new(4, 4)).is_flagged);
        assert!(game.player().inventory.is_empty());
    }
}
