//! Two-step items: activation picks a mode, the next direction resolves it.

use super::*;

const JUMP_CANCELLED: Text =
    Text::fixed("跳躍のブーツの使用をキャンセルしました。", "Cancelled use of Jumping Boots.");
const JUMP_OFF_GRID: Text = Text::fixed("フロアの外には跳べない。", "You cannot jump off the floor.");
const JUMP_ONTO_FLAG: Text =
    Text::fixed("チェックしたマスには着地できない。", "You cannot land on a checked square.");
const RECON_CANCELLED: Text = Text::fixed(
    "偵察ドローンの使用をキャンセルしました。",
    "Cancelled the use of the recon drone.",
);

pub struct BeginJump;

impl ItemEffect for BeginJump {
    fn apply(&self, game: &mut Game) -> EffectResult {
        game.mode = Mode::JumpingDirection;
        EffectResult::declined()
    }
}

pub struct BeginRecon;

impl ItemEffect for BeginRecon {
    fn apply(&self, game: &mut Game) -> EffectResult {
        game.mode = Mode::ReconDirection;
        EffectResult::declined()
    }
}

impl Game {
    /// Lands two cells away in `input`'s direction. Any non-direction cancels.
    pub(crate) fn resolve_jump(&mut self, input: Input) {
        self.mode = Mode::Playing;
        let Input::Move(direction) = input else {
            self.last_action_message = Some(JUMP_CANCELLED);
            return;
        };

        let target = self.player.pos.step(direction, 2);
        match self.grid.get(target) {
            None => {
                self.last_action_message = Some(JUMP_OFF_GRID);
                return;
            }
            Some(cell) if cell.is_flagged => {
                self.last_action_message = Some(JUMP_ONTO_FLAG);
                return;
            }
            Some(_) => {}
        }

        self.player.consume(ItemId::LongJump);
        self.player.pos = target;
        self.turn += 1;
        debug!(?target, "jumped");
        self.process_player_location();
    }

    /// Flies the drone in a straight line, revealing until the first trap,
    /// which is flagged.
    pub(crate) fn resolve_recon(&mut self, input: Input) {
        self.mode = Mode::Playing;
        let Input::Move(direction) = input else {
            self.last_action_message = Some(RECON_CANCELLED);
            return;
        };

        self.player.consume(ItemId::ReconDrone);
        let mut pos = self.player.pos.step(direction, 1);
        while let Some(cell) = self.grid.get_mut(pos) {
            if cell.is_trap {
                if !cell.is_revealed {
                    cell.is_flagged = true;
                }
                break;
            }
            self.reveal_from(pos);
            pos = pos.step(direction, 1);
        }
        self.turn += 1;
        self.process_player_location();
    }
}

#[cfg(test)]
mod tests {
    use crate::game::test_support::{give, input, started_game};
    use super::*;

    fn corridor() -> Game {
        started_game(&[
            "TTTTTTT", //
            "P...T..",
            "TTTTTTT",
            ".......",
            "......E",
        ])
    }

    #[test]
    fn recon_reveals_up_to_the_first_trap_and_flags_it() {
        let mut game = corridor();
        give(&mut game, &[ItemId::ReconDrone]);

        input(&mut game, "c");
        assert_eq!(game.mode(), &Mode::ReconDirection);
        input(&mut game, "right");

        for c in 1..=3 {
            assert!(game.grid().cell(Pos::new(1, c)).is_revealed, "(1,{c})");
        }
        let trap = game.grid().cell(Pos::new(1, 4));
        assert!(trap.is_flagged && !trap.is_revealed);
        assert!(!game.grid().cell(Pos::new(1, 5)).is_revealed);
        assert_eq!(game.mode(), &Mode::Playing);
        assert_eq!(game.turn(), 1);
        assert!(game.player().inventory.is_empty());
    }

    #[test]
    fn recon_cancels_on_anything_but_a_direction() {
        let mut game = corridor();
        give(&mut game, &[ItemId::ReconDrone]);

        input(&mut game, "c");
        input(&mut game, "yes");
        assert_eq!(game.mode(), &Mode::Playing);
        assert_eq!(game.player().inventory, vec![ItemId::ReconDrone]);
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("Cancelled the use of the recon drone.")
        );
    }

    #[test]
    fn jump_clears_an_adjacent_trap_diagonally() {
        let mut game = started_game(&[
            "P....", //
            ".T...",
            ".....",
            ".....",
            "....E",
        ]);
        give(&mut game, &[ItemId::LongJump]);

        input(&mut game, "j");
        assert_eq!(game.mode(), &Mode::JumpingDirection);
        input(&mut game, "down_right");
        assert_eq!(game.player().pos, Pos::new(2, 2));
        assert_eq!(game.mode(), &Mode::Playing);
        assert_eq!(game.turn(), 1);
        assert!(game.player().inventory.is_empty());
        assert!(game.grid().cell(Pos::new(2, 2)).is_revealed);
    }

    #[test]
    fn blocked_jumps_keep_the_boots_and_the_turn() {
        let mut game = started_game(&[
            "P....", //
            ".T...",
            ".....",
            ".....",
            "....E",
        ]);
        give(&mut game, &[ItemId::LongJump]);

        input(&mut game, "j");
        input(&mut game, "up");
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("You cannot jump off the floor.")
        );

        game.toggle_flag(Pos::new(2, 0));
        input(&mut game, "j");
        input(&mut game, "down");
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("You cannot land on a checked square.")
        );

        input(&mut game, "j");
        input(&mut game, "3");
        assert_eq!(
            game.last_action_message().map(|text| text.en.as_ref()),
            Some("Cancelled use of Jumping Boots.")
        );

        assert_eq!(game.player().pos, Pos::new(0, 0));
        assert_eq!(game.player().inventory, vec![ItemId::LongJump]);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.mode(), &Mode::Playing);
    }
}
