use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::{debug, info};

use crate::config::{Rules, RulesError};
use crate::content::{self, ItemId};
use crate::mapgen::{FloorGenerator, FloorPlan, STARTING_FLOOR};
use crate::random::{choose, random_index};
use crate::state::Grid;
use crate::types::*;

mod choices;
mod engine;
mod hash;
pub mod items;
mod prompts;
mod reveal;

#[cfg(test)]
mod test_support;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    /// Acquisition order; duplicates are separate charges.
    pub inventory: Vec<ItemId>,
}

impl Player {
    pub fn has_item(&self, id: ItemId) -> bool {
        self.inventory.contains(&id)
    }

    /// Removes the oldest instance of `id`.
    fn consume(&mut self, id: ItemId) -> bool {
        match self.inventory.iter().position(|held| *held == id) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }
}

pub struct Game {
    seed: u64,
    rules: Rules,
    rng: ChaCha8Rng,
    grid: Grid,
    player: Player,
    exit: Pos,
    floor: u32,
    turn: u32,
    mode: Mode,
    floor_history: Vec<FloorRevelation>,
    floor_fair: bool,
    exit_revealed_this_floor: bool,
    last_action_message: Option<Text>,
    ui_effect: Option<UiEffect>,
    just_acquired_item: Option<ItemId>,
    tutorial: Option<Tutorial>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    /// Like [`Game::with_rules`], rejecting rules that fail [`Rules::validate`].
    pub fn try_with_rules(seed: u64, rules: Rules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::with_rules(seed, rules))
    }

    /// The first floor is not generated until [`Game::setup_floor`] runs.
    /// `rules` must pass [`Rules::validate`]; floor setup panics on some
    /// invalid values, such as a zero `grid_growth_divisor`.
    pub fn with_rules(seed: u64, rules: Rules) -> Self {
        debug_assert!(rules.validate().is_ok(), "invalid rules: {rules:?}");
        Self {
            seed,
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
            grid: Grid::new(0, 0),
            player: Player { pos: Pos::new(0, 0), inventory: Vec::new() },
            exit: Pos::new(0, 0),
            floor: STARTING_FLOOR,
            turn: 0,
            mode: Mode::Playing,
            floor_history: Vec::new(),
            floor_fair: true,
            exit_revealed_this_floor: false,
            last_action_message: None,
            ui_effect: None,
            just_acquired_item: None,
            tutorial: None,
        }
    }

    /// Back to floor one with an empty inventory. The RNG stream carries on.
    pub fn reset_game(&mut self) {
        info!(seed = self.seed, "run reset");
        self.floor = STARTING_FLOOR;
        self.turn = 0;
        self.mode = Mode::Playing;
        self.player.inventory.clear();
        self.floor_history.clear();
        self.exit_revealed_this_floor = false;
        self.last_action_message = None;
        self.ui_effect = None;
        self.just_acquired_item = None;
        self.tutorial = None;
    }

    /// Generates the current floor and places the player on it. Returns the
    /// number of candidate layouts the generator built.
    pub fn setup_floor(&mut self) -> u32 {
        self.turn = 0;
        self.mode = Mode::Playing;
        self.exit_revealed_this_floor = false;

        if self.floor == STARTING_FLOOR {
            self.floor_history.clear();
            self.grant_starting_item();
        }
        if self.floor == self.rules.obscure_from_floor {
            self.tutorial = Some(obscured_cells_tutorial());
        }

        let plan = FloorPlan::for_floor(&self.rules, self.floor);
        let start = Pos::new(
            random_index(&mut self.rng, plan.size) as i32,
            random_index(&mut self.rng, plan.size) as i32,
        );
        let generated =
            FloorGenerator::new(&self.rules).generate(self.floor, start, &mut self.rng);

        self.grid = generated.grid;
        self.exit = generated.exit;
        self.player.pos = start;
        self.floor_fair = generated.fair;
        self.reveal_from(start);

        debug!(
            floor = self.floor,
            attempts = generated.attempts,
            ?start,
            exit = ?self.exit,
            "floor set up"
        );
        generated.attempts
    }

    pub fn advance_floor(&mut self) -> u32 {
        self.floor += 1;
        info!(floor = self.floor, "advancing to next floor");
        self.setup_floor()
    }

    fn grant_starting_item(&mut self) {
        let unheld: Vec<ItemId> = content::available_for_floor(STARTING_FLOOR)
            .into_iter()
            .filter(|id| !self.player.has_item(*id))
            .collect();
        if let Some(id) = choose(&mut self.rng, &unheld) {
            debug!(item = id.as_str(), "starting item granted");
            self.player.inventory.push(id);
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn exit(&self) -> Pos {
        self.exit
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn floor_history(&self) -> &[FloorRevelation] {
        &self.floor_history
    }

    /// Whether the current floor passed the generator's fairness checks.
    pub fn floor_is_fair(&self) -> bool {
        self.floor_fair
    }

    pub fn exit_revealed_this_floor(&self) -> bool {
        self.exit_revealed_this_floor
    }

    pub fn last_action_message(&self) -> Option<&Text> {
        self.last_action_message.as_ref()
    }

    pub fn ui_effect(&self) -> Option<UiEffect> {
        self.ui_effect
    }

    pub fn just_acquired_item(&self) -> Option<ItemId> {
        self.just_acquired_item
    }

    pub fn tutorial(&self) -> Option<&Tutorial> {
        self.tutorial.as_ref()
    }

    pub fn toggle_flag(&mut self, pos: Pos) -> bool {
        self.grid.toggle_flag(pos)
    }

    /// Revealed cells over all cells of the current floor.
    pub fn calculate_revelation_rate(&self) -> f64 {
        if self.grid.is_empty() {
            return 0.0;
        }
        self.grid.revealed_count() as f64 / self.grid.len() as f64
    }

    pub fn clear_last_action_message(&mut self) {
        self.last_action_message = None;
    }

    pub fn clear_ui_effect(&mut self) {
        self.ui_effect = None;
    }

    pub fn clear_just_acquired_item(&mut self) {
        self.just_acquired_item = None;
    }

    pub fn clear_tutorial(&mut self) {
        self.tutorial = None;
    }
}

fn obscured_cells_tutorial() -> Tutorial {
    Tutorial {
        title: Text::fixed("新ギミック：見通しの悪いマス", "New feature: obscured squares"),
        content: Text::fixed(
            "このフロアから、ひび割れた「見通しの悪いマス」が登場します。\n\nこのマスに表示される数字は、そのマスの「上下左右」4方向にある罠の数のみを示しており、「斜め」方向の罠はカウントしません。\n\n開示して初めて判明するため、注意深く探索しましょう。",
            "From this floor on, cracked \"obscured squares\" appear.\n\nThe number on such a square counts only traps directly above, below, left, and right of it. Diagonal traps are not counted.\n\nYou only learn a square is obscured once it is revealed, so explore carefully.",
        ),
    }
}
