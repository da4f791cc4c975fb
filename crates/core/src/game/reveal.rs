//! Cell disclosure: cascading reveal, single-cell reveal, and trap detection.

use super::*;

impl Game {
    /// Reveals `pos` and, through zero-count cells, everything reachable under
    /// each cell's visibility rule. Out-of-bounds or already revealed cells are
    /// left alone.
    pub(crate) fn reveal_from(&mut self, pos: Pos) {
        let mut stack = vec![pos];
        while let Some(pos) = stack.pop() {
            let Some(cell) = self.grid.get_mut(pos) else {
                continue;
            };
            if cell.is_revealed {
                continue;
            }
            cell.is_revealed = true;
            cell.is_flagged = false;

            if !cell.is_trap && cell.adjacent_traps == 0 {
                stack.extend(self.grid.visibility_neighbors(pos));
            }
        }
    }

    /// Reveals exactly one cell without cascading.
    pub(crate) fn mark_revealed(&mut self, pos: Pos) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.is_revealed = true;
            cell.is_flagged = false;
        }
    }

    /// Flags a trap or reveals a safe cell. Returns whether anything changed.
    pub(crate) fn expose(&mut self, pos: Pos) -> bool {
        let Some(cell) = self.grid.get_mut(pos) else {
            return false;
        };
        if cell.is_trap {
            if cell.is_revealed || cell.is_flagged {
                return false;
            }
            cell.is_flagged = true;
            return true;
        }
        if cell.is_revealed {
            return false;
        }
        self.reveal_from(pos);
        true
    }
}
