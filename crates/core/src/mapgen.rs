//! Procedural floor generation split into planning, candidate building, and fairness checks.

pub mod model;
pub mod progression;

mod generator;
mod reachability;

use rand_chacha::ChaCha8Rng;

use crate::config::Rules;
use crate::types::Pos;

pub use generator::FloorGenerator;
pub use model::GeneratedFloor;
pub use progression::{FloorPlan, STARTING_FLOOR};
pub use reachability::{is_goal_initially_visible, is_solvable};

pub fn generate_floor(
    rules: &Rules,
    floor: u32,
    start: Pos,
    rng: &mut ChaCha8Rng,
) -> GeneratedFloor {
    FloorGenerator::new(rules).generate(floor, start, rng)
}
