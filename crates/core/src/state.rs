use serde::Serialize;

use crate::content::ItemId;
use crate::topology::{neighbors4, neighbors8};
use crate::types::Pos;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub is_trap: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Counts only the four orthogonal neighbours instead of all eight.
    pub is_obscured: bool,
    pub adjacent_traps: u8,
    pub item: Option<ItemId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Cell::default(); rows * cols] }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.cells[self.index(pos)])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(&mut self.cells[idx])
    }

    /// Panics when `pos` is off the grid; callers validate positions first.
    pub fn cell(&self, pos: Pos) -> &Cell {
        self.get(pos).expect("cell position should be in bounds")
    }

    pub fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        self.get_mut(pos).expect("cell position should be in bounds")
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Pos::new(r as i32, c as i32)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    pub fn is_trap(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_trap)
    }

    pub fn place_trap(&mut self, pos: Pos) {
        let cell = self.cell_mut(pos);
        assert!(!cell.is_trap, "trap placed twice at {pos:?}");
        cell.is_trap = true;
    }

    pub fn trap_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_trap).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed).count()
    }

    /// Neighbours whose traps contribute to this cell's count.
    pub fn visibility_neighbors(&self, pos: Pos) -> Vec<Pos> {
        if self.cell(pos).is_obscured {
            neighbors4(pos, self.rows, self.cols)
        } else {
            neighbors8(pos, self.rows, self.cols)
        }
    }

    pub fn count_adjacent_traps(&self, pos: Pos) -> u8 {
        self.visibility_neighbors(pos).into_iter().filter(|n| self.is_trap(*n)).count() as u8
    }

    /// Recomputes every non-trap cell's count under its visibility rule.
    pub fn recalculate_numbers(&mut self) {
        let counts: Vec<u8> = self
            .positions()
            .map(|pos| if self.is_trap(pos) { 0 } else { self.count_adjacent_traps(pos) })
            .collect();
        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.adjacent_traps = count;
        }
    }

    /// Flips the flag on an unrevealed cell. Revealed cells never carry flags.
    pub fn toggle_flag(&mut self, pos: Pos) -> bool {
        let Some(cell) = self.get_mut(pos) else {
            return false;
        };
        if cell.is_revealed {
            return false;
        }
        cell.is_flagged = !cell.is_flagged;
        true
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.r as usize) * self.cols + (pos.c as usize)
    }
}
