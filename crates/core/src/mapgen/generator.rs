//! Candidate-and-verify floor generation: place traps, exit, and items, then keep
//! the layout only when a deducing player can reach the exit without seeing it
//! from the start.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::config::Rules;
use crate::content;
use crate::random::{choose, take_random};
use crate::state::Grid;
use crate::topology::{is_valid_cell, neighbors8};
use crate::types::Pos;

use super::model::GeneratedFloor;
use super::progression::FloorPlan;
use super::reachability::{is_goal_initially_visible, is_solvable};

pub struct FloorGenerator<'a> {
    rules: &'a Rules,
}

impl<'a> FloorGenerator<'a> {
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    /// `start` must lie inside the floor's grid.
    pub fn generate(&self, floor: u32, start: Pos, rng: &mut ChaCha8Rng) -> GeneratedFloor {
        let plan = FloorPlan::for_floor(self.rules, floor);
        let max_attempts = self.rules.max_generation_attempts;
        assert!(
            is_valid_cell(start, plan.size, plan.size),
            "start {start:?} outside a {0}x{0} floor",
            plan.size
        );

        let mut attempts = 0;
        loop {
            attempts += 1;
            let capped = attempts >= max_attempts;

            let mut grid = Grid::new(plan.size, plan.size);
            place_traps(&mut grid, start, plan.trap_count, rng);
            grid.recalculate_numbers();

            let exit = match pick_exit(&grid, start, rng) {
                Some(exit) => exit,
                None if capped => fallback_exit(&grid, start, rng),
                None => continue,
            };
            place_items(&mut grid, start, exit, &plan, rng);

            let fair =
                is_solvable(&grid, start, exit) && !is_goal_initially_visible(&grid, start, exit);
            if !fair && !capped {
                continue;
            }
            if !fair {
                warn!(
                    floor,
                    attempts, "generation attempt cap reached; accepting an unverified floor"
                );
            }

            if plan.obscure {
                obscure_safe_cells(&mut grid, start, exit, self.rules.obscure_ratio, rng);
            }

            debug!(floor, attempts, fair, size = plan.size, "floor generated");
            return GeneratedFloor { floor, grid, start, exit, attempts, fair };
        }
    }
}

/// The start cell plus its in-bounds neighbours.
fn forbidden_zone(start: Pos, rows: usize, cols: usize) -> Vec<Pos> {
    let mut zone = neighbors8(start, rows, cols);
    zone.push(start);
    zone
}

fn place_traps(grid: &mut Grid, start: Pos, trap_count: usize, rng: &mut ChaCha8Rng) {
    let forbidden = forbidden_zone(start, grid.rows(), grid.cols());
    let mut pool: Vec<Pos> = grid.positions().filter(|pos| !forbidden.contains(pos)).collect();
    // One cell always stays free for the exit.
    let count = trap_count.min(pool.len().saturating_sub(1));
    for _ in 0..count {
        if let Some(pos) = take_random(rng, &mut pool) {
            grid.place_trap(pos);
        }
    }
}

fn pick_exit(grid: &Grid, start: Pos, rng: &mut ChaCha8Rng) -> Option<Pos> {
    let forbidden = forbidden_zone(start, grid.rows(), grid.cols());
    let mut candidates: Vec<Pos> = grid
        .cells()
        .filter(|(pos, cell)| {
            !cell.is_trap && cell.adjacent_traps == 0 && !forbidden.contains(pos)
        })
        .map(|(pos, _)| pos)
        .collect();
    if candidates.len() < 2 {
        return None;
    }
    take_random(rng, &mut candidates)
}

fn fallback_exit(grid: &Grid, start: Pos, rng: &mut ChaCha8Rng) -> Pos {
    let forbidden = forbidden_zone(start, grid.rows(), grid.cols());
    let free: Vec<Pos> = grid
        .cells()
        .filter(|(pos, cell)| !cell.is_trap && !forbidden.contains(pos))
        .map(|(pos, _)| pos)
        .collect();
    choose(rng, &free).expect("trap placement should leave a free cell outside the start zone")
}

fn place_items(grid: &mut Grid, start: Pos, exit: Pos, plan: &FloorPlan, rng: &mut ChaCha8Rng) {
    let placeable = content::placeable_for_floor(plan.floor);
    let mut cells: Vec<Pos> = grid
        .cells()
        .filter(|(pos, cell)| {
            !cell.is_trap && cell.adjacent_traps == 0 && *pos != start && *pos != exit
        })
        .map(|(pos, _)| pos)
        .collect();

    for _ in 0..plan.item_count {
        let Some(pos) = take_random(rng, &mut cells) else {
            break;
        };
        let Some(id) = choose(rng, &placeable) else {
            break;
        };
        grid.cell_mut(pos).item = Some(id);
    }
}

fn obscure_safe_cells(grid: &mut Grid, start: Pos, exit: Pos, ratio: f64, rng: &mut ChaCha8Rng) {
    let forbidden = forbidden_zone(start, grid.rows(), grid.cols());
    let mut safe: Vec<Pos> = grid
        .cells()
        .filter(|(pos, cell)| {
            !cell.is_trap && cell.item.is_none() && *pos != exit && !forbidden.contains(pos)
        })
        .map(|(pos, _)| pos)
        .collect();

    let count = (safe.len() as f64 * ratio).floor() as usize;
    for _ in 0..count {
        let Some(pos) = take_random(rng, &mut safe) else {
            break;
        };
        grid.cell_mut(pos).is_obscured = true;
    }
    grid.recalculate_numbers();
}
