//! Item activation and the per-item effect implementations.
//! This module exists to keep item behaviour out of input dispatch.
//! It does not own item definitions; names, keys, and floor bounds live in `content`.

use super::*;

mod exit_maps;
mod movement;
mod scouting;
mod traps;

pub use exit_maps::{RevealExit, RevealExitSurroundings, ThreadToExit};
pub use movement::{BeginJump, BeginRecon};
pub use scouting::{RevealNeighborTraps, RevealWideArea};
pub use traps::{DisarmNearbyTrap, ShuffleTraps};

/// Outcome of one activation. A declined effect leaves the grid untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectResult {
    pub consumed: bool,
    pub message: Option<Text>,
}

impl EffectResult {
    pub fn consumed() -> Self {
        Self { consumed: true, message: None }
    }

    pub fn declined() -> Self {
        Self { consumed: false, message: None }
    }

    pub fn declined_with(message: Text) -> Self {
        Self { consumed: false, message: Some(message) }
    }
}

pub trait ItemEffect {
    fn apply(&self, game: &mut Game) -> EffectResult;
}

impl Game {
    /// Runs the effect of a held item. Consumption costs a turn; the player's
    /// cell is not resolved again.
    pub(super) fn use_item(&mut self, id: ItemId) {
        let Some(effect) = content::effect(id) else {
            debug!(item = id.as_str(), "passive item has no activation");
            return;
        };

        let result = effect.apply(self);
        debug!(item = id.as_str(), consumed = result.consumed, "item used");
        if let Some(message) = result.message {
            self.last_action_message = Some(message);
        }
        if result.consumed {
            self.player.consume(id);
            self.turn += 1;
        }
    }
}
