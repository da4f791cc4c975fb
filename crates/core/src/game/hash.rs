//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn handling.
//! It does not own replay execution or journal recording.

use std::hash::Hasher;

use super::*;
use crate::state::Cell;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    /// Hash over everything a replay must reproduce: position, floor layout,
    /// knowledge, inventory, and mode.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.floor);
        hasher.write_u32(self.turn);
        hasher.write(self.mode.label().as_bytes());
        if let Mode::ChoosingItem { offers } = &self.mode {
            for id in offers {
                hasher.write(id.as_str().as_bytes());
            }
        }
        hasher.write_i32(self.player.pos.r);
        hasher.write_i32(self.player.pos.c);
        hasher.write_i32(self.exit.r);
        hasher.write_i32(self.exit.c);
        hasher.write_u8(u8::from(self.exit_revealed_this_floor));

        hasher.write_usize(self.grid.rows());
        hasher.write_usize(self.grid.cols());
        for (_, cell) in self.grid.cells() {
            hasher.write_u8(cell_bits(cell));
            hasher.write_u8(cell.adjacent_traps);
            hasher.write(cell.item.map_or("", |id| id.as_str()).as_bytes());
        }

        hasher.write_usize(self.player.inventory.len());
        for id in &self.player.inventory {
            hasher.write(id.as_str().as_bytes());
        }
        for entry in &self.floor_history {
            hasher.write_u32(entry.floor);
            hasher.write_u64(entry.revealed_fraction.to_bits());
        }
        hasher.finish()
    }
}

fn cell_bits(cell: &Cell) -> u8 {
    u8::from(cell.is_trap)
        | u8::from(cell.is_revealed) << 1
        | u8::from(cell.is_flagged) << 2
        | u8::from(cell.is_obscured) << 3
}
