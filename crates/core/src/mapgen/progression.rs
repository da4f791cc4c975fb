//! Per-floor difficulty derived from the active rules.

use crate::config::Rules;

pub const STARTING_FLOOR: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorPlan {
    pub floor: u32,
    pub size: usize,
    pub trap_count: usize,
    pub item_count: usize,
    pub obscure: bool,
}

impl FloorPlan {
    pub fn for_floor(rules: &Rules, floor: u32) -> Self {
        Self {
            floor,
            size: rules.grid_size(floor),
            trap_count: rules.trap_count(floor),
            item_count: rules.item_count(floor),
            obscure: rules.obscures(floor),
        }
    }
}
