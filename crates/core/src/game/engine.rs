//! Token dispatch for the turn state machine.
//! This module exists to route each parsed input by mode and to settle what
//! happens on the cell the player ends up on.
//! It does not own item effects, reward offers, or floor generation.

use super::*;

const CHECKED_SQUARE: Text =
    Text::fixed("チェックしたマスには移動できません。", "You cannot move to a checked square.");
const SHIELD_ABSORBED: Text =
    Text::fixed("鉄の心臓が身代わりになった！", "The Iron Heart has taken its place!");
const STEPPED_ON_TRAP: Text = Text::fixed("罠を踏んでしまった！", "I stepped into a trap!");

impl Game {
    /// Parses and applies one raw token. Unparseable tokens are ignored.
    pub fn handle_input(&mut self, token: &str) -> Option<EngineAction> {
        match token.parse::<Input>() {
            Ok(input) => self.apply(input),
            Err(error) => {
                debug!(%error, mode = self.mode.label(), "input ignored");
                None
            }
        }
    }

    /// Applies one input under the current mode. `AdvanceFloor` is returned
    /// only after a reward pick; the caller then runs [`Game::advance_floor`].
    pub fn apply(&mut self, input: Input) -> Option<EngineAction> {
        match self.mode {
            Mode::Playing => self.play(input),
            Mode::ConfirmNextFloor => self.confirm_next_floor(input),
            Mode::ChoosingItem { .. } => return self.choose_offer(input),
            Mode::JumpingDirection => self.resolve_jump(input),
            Mode::ReconDirection => self.resolve_recon(input),
            Mode::GameOver => debug!(?input, "input ignored after game over"),
        }
        None
    }

    fn play(&mut self, input: Input) {
        match input {
            Input::Move(direction) => self.move_player(direction),
            Input::ItemKey(key) => self.activate_item_key(key),
            other => debug!(input = ?other, "input ignored while playing"),
        }
    }

    fn move_player(&mut self, direction: Direction) {
        let target = self.player.pos.step(direction, 1);
        let Some(cell) = self.grid.get(target) else {
            debug!(?target, "move off the floor ignored");
            return;
        };
        if cell.is_flagged {
            self.last_action_message = Some(CHECKED_SQUARE);
            return;
        }

        self.player.pos = target;
        self.turn += 1;
        self.process_player_location();
    }

    fn activate_item_key(&mut self, key: char) {
        match ItemId::from_key(key) {
            Some(id) if self.player.has_item(id) => self.use_item(id),
            _ => debug!(%key, "item key ignored"),
        }
    }

    /// Settles the player's current cell: exit, trap, pickup, then reveal.
    pub(super) fn process_player_location(&mut self) {
        let pos = self.player.pos;
        if pos == self.exit {
            self.mode = Mode::ConfirmNextFloor;
        } else if self.grid.is_trap(pos) {
            self.spring_trap(pos);
        }
        if self.mode == Mode::GameOver {
            return;
        }

        if let Some(id) = self.grid.cell_mut(pos).item.take() {
            debug!(item = id.as_str(), ?pos, "item picked up");
            self.player.inventory.push(id);
            self.just_acquired_item = Some(id);
        }
        self.reveal_from(pos);
    }

    fn spring_trap(&mut self, pos: Pos) {
        if self.player.consume(ItemId::TrapShield) {
            self.grid.cell_mut(pos).is_trap = false;
            self.grid.recalculate_numbers();
            self.ui_effect = Some(UiEffect::FlashRed);
            self.last_action_message = Some(SHIELD_ABSORBED);
            info!(?pos, floor = self.floor, "trap absorbed by shield");
        } else {
            self.mark_revealed(pos);
            self.mode = Mode::GameOver;
            self.last_action_message = Some(STEPPED_ON_TRAP);
            info!(?pos, floor = self.floor, turn = self.turn, "run ended on a trap");
        }
    }
}
