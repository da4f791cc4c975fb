//! Fairness checks for candidate floors.
//! This module models a player who only steps on cells they can prove safe from revealed counts.
//! It does not mutate the grid; every check works on a private knowledge overlay.

use std::collections::VecDeque;

use crate::state::Grid;
use crate::topology::neighbors8;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Knowledge {
    Unknown,
    Safe,
    Trap,
}

struct Deduction<'a> {
    grid: &'a Grid,
    known: Vec<Knowledge>,
}

impl<'a> Deduction<'a> {
    fn new(grid: &'a Grid) -> Self {
        Self { grid, known: vec![Knowledge::Unknown; grid.len()] }
    }

    fn slot(&self, pos: Pos) -> usize {
        (pos.r as usize) * self.grid.cols() + (pos.c as usize)
    }

    fn knowledge(&self, pos: Pos) -> Knowledge {
        self.known[self.slot(pos)]
    }

    fn set(&mut self, pos: Pos, value: Knowledge) {
        let slot = self.slot(pos);
        self.known[slot] = value;
    }

    /// Same expansion rule as the in-game reveal: zero-count cells open their
    /// visibility neighbourhood.
    fn flood(&mut self, origin: Pos) -> bool {
        let mut changed = false;
        let mut stack = vec![origin];
        while let Some(pos) = stack.pop() {
            if self.knowledge(pos) == Knowledge::Safe {
                continue;
            }
            debug_assert!(!self.grid.is_trap(pos), "flood reached a trap at {pos:?}");
            self.set(pos, Knowledge::Safe);
            changed = true;

            if self.grid.cell(pos).adjacent_traps == 0 {
                stack.extend(self.grid.visibility_neighbors(pos));
            }
        }
        changed
    }

    /// One pass of the two counting rules over every known-safe cell.
    fn sweep(&mut self) -> bool {
        let mut changed = false;
        let frontier: Vec<Pos> =
            self.grid.positions().filter(|pos| self.knowledge(*pos) == Knowledge::Safe).collect();

        for pos in frontier {
            let count = usize::from(self.grid.cell(pos).adjacent_traps);
            let neighbors = self.grid.visibility_neighbors(pos);
            let known_traps =
                neighbors.iter().filter(|n| self.knowledge(**n) == Knowledge::Trap).count();
            let unknown: Vec<Pos> = neighbors
                .into_iter()
                .filter(|n| self.knowledge(*n) == Knowledge::Unknown)
                .collect();
            if unknown.is_empty() {
                continue;
            }

            if known_traps == count {
                for cell in unknown {
                    changed |= self.flood(cell);
                }
            } else if known_traps + unknown.len() == count {
                for cell in unknown {
                    self.set(cell, Knowledge::Trap);
                }
                changed = true;
            }
        }
        changed
    }

    fn safe_path_exists(&self, start: Pos, goal: Pos) -> bool {
        let mut visited = vec![false; self.grid.len()];
        let mut queue = VecDeque::from([start]);
        visited[self.slot(start)] = true;

        while let Some(pos) = queue.pop_front() {
            if pos == goal {
                return true;
            }
            for next in neighbors8(pos, self.grid.rows(), self.grid.cols()) {
                let slot = self.slot(next);
                if visited[slot] || self.known[slot] != Knowledge::Safe {
                    continue;
                }
                visited[slot] = true;
                queue.push_back(next);
            }
        }
        false
    }
}

/// Whether a player who never guesses can walk from `start` to `exit`.
pub fn is_solvable(grid: &Grid, start: Pos, exit: Pos) -> bool {
    if grid.is_trap(start) || grid.is_trap(exit) {
        return false;
    }

    let mut deduction = Deduction::new(grid);
    deduction.flood(start);
    while deduction.knowledge(exit) != Knowledge::Safe {
        if !deduction.sweep() {
            return false;
        }
    }
    deduction.safe_path_exists(start, exit)
}

/// Whether the opening reveal from `start` already discloses the exit.
pub fn is_goal_initially_visible(grid: &Grid, start: Pos, exit: Pos) -> bool {
    if grid.is_trap(start) {
        return false;
    }
    let mut deduction = Deduction::new(grid);
    deduction.flood(start);
    deduction.knowledge(exit) == Knowledge::Safe
}
