//! Output model of floor generation.

use crate::content::ItemId;
use crate::state::Grid;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub floor: u32,
    pub grid: Grid,
    pub start: Pos,
    pub exit: Pos,
    /// Candidate layouts built, including the accepted one.
    pub attempts: u32,
    /// `false` when the attempt cap forced acceptance of a layout that failed
    /// the solvability or hidden-exit checks. Describes the layout before
    /// obscuring: an obscured floor may be unsolvable even when this is `true`.
    pub fair: bool,
}

impl GeneratedFloor {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16 + self.grid.len() * 3);
        bytes.extend(self.floor.to_le_bytes());
        bytes.extend((self.grid.rows() as u32).to_le_bytes());
        bytes.extend((self.grid.cols() as u32).to_le_bytes());
        for (_, cell) in self.grid.cells() {
            let flags = u8::from(cell.is_trap)
                | (u8::from(cell.is_revealed) << 1)
                | (u8::from(cell.is_flagged) << 2)
                | (u8::from(cell.is_obscured) << 3);
            bytes.push(flags);
            bytes.push(cell.adjacent_traps);
            bytes.push(cell.item.map_or(0, item_code));
        }
        bytes.extend(self.start.r.to_le_bytes());
        bytes.extend(self.start.c.to_le_bytes());
        bytes.extend(self.exit.r.to_le_bytes());
        bytes.extend(self.exit.c.to_le_bytes());
        bytes
    }

    pub fn item_positions(&self) -> Vec<(Pos, ItemId)> {
        self.grid.cells().filter_map(|(pos, cell)| cell.item.map(|id| (pos, id))).collect()
    }
}

fn item_code(id: ItemId) -> u8 {
    ItemId::ALL.iter().position(|candidate| *candidate == id).map_or(0, |index| index as u8 + 1)
}
