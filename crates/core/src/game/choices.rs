//! Leaving a floor: the confirmation step and the reward pick.
//! This module exists to gate rewards on how much of the floor was explored.
//! It does not own floor generation; advancing calls back into `setup_floor`.

use super::*;
use crate::random::shuffle;

impl Game {
    pub(super) fn confirm_next_floor(&mut self, input: Input) {
        match input {
            Input::Yes => self.leave_floor(),
            Input::No => self.mode = Mode::Playing,
            other => debug!(input = ?other, "input ignored at the exit"),
        }
    }

    fn leave_floor(&mut self) {
        let revealed_fraction = self.calculate_revelation_rate();
        self.floor_history.push(FloorRevelation { floor: self.floor, revealed_fraction });

        let threshold = self.rules.revelation_threshold;
        if revealed_fraction < threshold {
            info!(floor = self.floor, revealed_fraction, "floor left without a reward");
            self.last_action_message = Some(no_bonus_message(threshold, revealed_fraction));
            self.advance_floor();
            return;
        }

        let offers = self.draw_offers();
        if offers.is_empty() {
            self.advance_floor();
            return;
        }
        debug!(floor = self.floor, ?offers, "reward offered");
        self.mode = Mode::ChoosingItem { offers };
    }

    /// Distinct items valid on the floor the player is about to enter.
    fn draw_offers(&mut self) -> Vec<ItemId> {
        let mut pool = content::available_for_floor(self.floor + 1);
        shuffle(&mut self.rng, &mut pool);
        pool.truncate(self.rules.offer_count);
        pool
    }

    /// Takes the 1-based pick. The offers are emptied so a repeated pick
    /// before the caller advances is ignored.
    pub(super) fn choose_offer(&mut self, input: Input) -> Option<EngineAction> {
        let Mode::ChoosingItem { offers } = &self.mode else {
            return None;
        };
        let picked = match input {
            Input::Choice(index) => index.checked_sub(1).and_then(|index| offers.get(index)).copied(),
            _ => None,
        };
        let Some(id) = picked else {
            debug!(?input, offered = offers.len(), "reward choice ignored");
            return None;
        };

        self.player.inventory.push(id);
        self.mode = Mode::ChoosingItem { offers: Vec::new() };
        info!(item = id.as_str(), floor = self.floor, "reward taken");
        Some(EngineAction::AdvanceFloor)
    }
}

fn no_bonus_message(threshold: f64, revealed_fraction: f64) -> Text {
    let threshold = threshold * 100.0;
    let revealed = revealed_fraction * 100.0;
    Text::owned(
        format!(
            "フロア開示率が{threshold:.0}%未満のため、アイテムボーナスはありませんでした。（{revealed:.0}%）"
        ),
        format!(
            "There were no item bonuses as the floor disclosure rate was less than {threshold:.0}%. ({revealed:.0}%)"
        ),
    )
}
