//! Snapshot assembly for adapters.
//! This module exists to turn engine state into the serializable turn result.
//! It does not mutate gameplay state apart from the floor advance in `step`.

use std::collections::BTreeMap;

use super::*;

const GAME_OVER_BANNER: &str = "!!! GAME OVER !!!";

impl Game {
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            grid: self.grid.clone(),
            player: self.player.pos,
            exit: self.exit,
            floor: self.floor,
            items: self.player.inventory.clone(),
            turn: self.turn,
            mode: self.mode.clone(),
            exit_revealed_this_floor: self.exit_revealed_this_floor,
        }
    }

    /// The view an adapter renders after each input.
    pub fn game_loop(&self) -> TurnResult {
        if self.mode == Mode::GameOver {
            return TurnResult::GameOver(GameOverView {
                display: self.display_state(),
                message: GAME_OVER_BANNER,
                last_action_message: self.last_action_message.clone(),
                summary: self.run_summary(),
            });
        }

        TurnResult::InProgress(PlayView {
            display: self.display_state(),
            prompt: self.prompt(),
            message: mode_message(&self.mode),
            last_action_message: self.last_action_message.clone(),
            ui_effect: self.ui_effect,
            new_item_acquired: self.just_acquired_item.map(|id| {
                let def = content::definition(id);
                AcquiredItem { id, name: def.name.clone(), description: def.description.clone() }
            }),
            tutorial: self.tutorial.clone(),
        })
    }

    /// Applies a token, advances when a reward was taken, and reports the view.
    pub fn step(&mut self, token: &str) -> TurnResult {
        if let Some(EngineAction::AdvanceFloor) = self.handle_input(token) {
            self.advance_floor();
        }
        self.game_loop()
    }

    fn prompt(&self) -> String {
        let actions: Vec<String> = self
            .player
            .inventory
            .iter()
            .filter_map(|id| {
                let def = content::definition(*id);
                def.key.map(|key| format!("{key}: {}", def.name.en))
            })
            .collect();

        let mut prompt = String::from("Move (w/a/s/d)");
        if !actions.is_empty() {
            prompt.push_str(&format!(" | Use Item ({})", actions.join(", ")));
        }
        prompt.push_str(" > ");
        prompt
    }

    fn run_summary(&self) -> RunSummary {
        let mut final_items = BTreeMap::new();
        for id in &self.player.inventory {
            *final_items.entry(*id).or_insert(0) += 1;
        }
        RunSummary {
            final_floor: self.floor,
            final_items,
            floor_revelations: self.floor_history.clone(),
        }
    }
}

fn mode_message(mode: &Mode) -> &'static str {
    match mode {
        Mode::ChoosingItem { .. } => "Floor Cleared! Choose your reward:",
        Mode::JumpingDirection => "Jump direction (up/down/left/right or diagonal):",
        Mode::ReconDirection => "Recon direction (up/down/left/right or diagonal):",
        Mode::ConfirmNextFloor => "Go next floor?",
        Mode::Playing => "",
        Mode::GameOver => GAME_OVER_BANNER,
    }
}
