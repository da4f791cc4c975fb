//! Static item catalog.
//! This module owns item identity, display text, trigger keys, and floor bounds.
//! It does not own item behaviour; effects live under `game::items`.

use serde::Serialize;

use crate::game::items::{self, ItemEffect};
use crate::types::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    RevealOneTrap,
    TrapShield,
    ReduceTraps,
    RevealExit,
    LongJump,
    ReconDrone,
    AriadnesThread,
    DetailedMapOfExit,
    PhilosophersStone,
    ScrollOfChaos,
}

impl ItemId {
    pub const ALL: [ItemId; 10] = [
        ItemId::RevealOneTrap,
        ItemId::TrapShield,
        ItemId::ReduceTraps,
        ItemId::RevealExit,
        ItemId::LongJump,
        ItemId::ReconDrone,
        ItemId::AriadnesThread,
        ItemId::DetailedMapOfExit,
        ItemId::PhilosophersStone,
        ItemId::ScrollOfChaos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::RevealOneTrap => "reveal_one_trap",
            ItemId::TrapShield => "trap_shield",
            ItemId::ReduceTraps => "reduce_traps",
            ItemId::RevealExit => "reveal_exit",
            ItemId::LongJump => "long_jump",
            ItemId::ReconDrone => "recon_drone",
            ItemId::AriadnesThread => "ariadnes_thread",
            ItemId::DetailedMapOfExit => "detailed_map_of_exit",
            ItemId::PhilosophersStone => "philosophers_stone",
            ItemId::ScrollOfChaos => "scroll_of_chaos",
        }
    }

    pub fn definition(self) -> &'static ItemDef {
        definition(self)
    }

    /// Activatable items carry a trigger key; passive ones do not.
    pub fn key(self) -> Option<char> {
        definition(self).key
    }

    pub fn from_key(key: char) -> Option<ItemId> {
        CATALOG.iter().find(|def| def.key == Some(key)).map(|def| def.id)
    }
}

pub struct ItemDef {
    pub id: ItemId,
    pub name: Text,
    pub description: Text,
    pub key: Option<char>,
    pub min_floor: u32,
    /// `None` means the item never leaves the pool.
    pub max_floor: Option<u32>,
}

impl ItemDef {
    pub fn is_available_on(&self, floor: u32) -> bool {
        floor >= self.min_floor && self.max_floor.is_none_or(|max| floor <= max)
    }
}

static CATALOG: [ItemDef; 10] = [
    ItemDef {
        id: ItemId::RevealOneTrap,
        name: Text::fixed("千里眼の巻物", "Scroll of Clairvoyance"),
        description: Text::fixed(
            "プレイヤーの周囲8マスにある罠をすべて明らかにする。",
            "Reveals all traps within 8 squares of the player.",
        ),
        key: Some('r'),
        min_floor: 1,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::TrapShield,
        name: Text::fixed("鉄の心臓", "Heart of Iron"),
        description: Text::fixed(
            "罠を踏んだ時に1度だけ身代わりになる。(パッシブ)",
            "Takes the blow of one trap in your place. (Passive)",
        ),
        key: None,
        min_floor: 1,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::ReduceTraps,
        name: Text::fixed("解体の手引き", "Disassembly Guide"),
        description: Text::fixed(
            "プレイヤーから周囲8マスのランダムな罠1つを無効化する。",
            "Disables one random trap within 8 squares of the player.",
        ),
        key: Some('t'),
        min_floor: 1,
        max_floor: Some(10),
    },
    ItemDef {
        id: ItemId::RevealExit,
        name: Text::fixed("出口の地図", "Map of Exit"),
        description: Text::fixed(
            "現在のフロアの出口(E)の位置を明らかにする。",
            "Reveals the location of the exit (E) on the current floor.",
        ),
        key: Some('e'),
        min_floor: 1,
        max_floor: Some(8),
    },
    ItemDef {
        id: ItemId::LongJump,
        name: Text::fixed("跳躍のブーツ", "Jumping Boots"),
        description: Text::fixed(
            "指定した方向に1マス飛び越えて、2マス先に進む。",
            "Leaps over one square in the chosen direction, landing two squares away.",
        ),
        key: Some('j'),
        min_floor: 1,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::ReconDrone,
        name: Text::fixed("偵察ドローン", "Reconnaissance Drone"),
        description: Text::fixed(
            "指定した方向へ一直線に飛び、通路を次々と開示する。進路上に罠があれば、その罠を示して停止する。",
            "Flies in a straight line in the chosen direction, revealing passages as it goes. It marks the first trap in its path and stops.",
        ),
        key: Some('c'),
        min_floor: 5,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::AriadnesThread,
        name: Text::fixed("アリアドネの糸", "Ariadne's Thread"),
        description: Text::fixed(
            "プレイヤーから出口までの直線上のマスをすべて開示する。経路上の罠も表示される。",
            "Reveals every square on the straight line from the player to the exit, traps included.",
        ),
        key: Some('g'),
        min_floor: 5,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::DetailedMapOfExit,
        name: Text::fixed("詳細な出口の地図", "Detailed Exit Map"),
        description: Text::fixed(
            "出口の位置を明らかにすると同時に、出口に隣接する周囲8マスの状態もすべて開示する。",
            "Reveals the exit together with all eight squares surrounding it.",
        ),
        key: Some('x'),
        min_floor: 5,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::PhilosophersStone,
        name: Text::fixed("賢者の石", "Philosopher's Stone"),
        description: Text::fixed(
            "プレイヤーの周囲5x5の広大な範囲を一度に開示する。",
            "Reveals the whole 5x5 area around the player at once.",
        ),
        key: Some('p'),
        min_floor: 10,
        max_floor: None,
    },
    ItemDef {
        id: ItemId::ScrollOfChaos,
        name: Text::fixed("無秩序の巻物", "Scroll of Chaos"),
        description: Text::fixed(
            "まだ開示もフラグもされていないマスで、罠の配置をシャッフルする。罠の総数は変わらない。",
            "Shuffles the traps among squares that are neither revealed nor flagged. The trap total stays the same.",
        ),
        key: Some('k'),
        min_floor: 10,
        max_floor: None,
    },
];

pub fn catalog() -> &'static [ItemDef] {
    &CATALOG
}

pub fn definition(id: ItemId) -> &'static ItemDef {
    CATALOG.iter().find(|def| def.id == id).expect("every item id should have a catalog entry")
}

/// Catalog order, which keeps random draws over the result reproducible.
pub fn available_for_floor(floor: u32) -> Vec<ItemId> {
    CATALOG.iter().filter(|def| def.is_available_on(floor)).map(|def| def.id).collect()
}

/// Items that may be scattered on a floor: keyed and in bounds for it.
pub fn placeable_for_floor(floor: u32) -> Vec<ItemId> {
    CATALOG
        .iter()
        .filter(|def| def.key.is_some() && def.is_available_on(floor))
        .map(|def| def.id)
        .collect()
}

pub fn effect(id: ItemId) -> Option<&'static dyn ItemEffect> {
    match id {
        ItemId::RevealOneTrap => Some(&items::RevealNeighborTraps),
        ItemId::TrapShield => None,
        ItemId::ReduceTraps => Some(&items::DisarmNearbyTrap),
        ItemId::RevealExit => Some(&items::RevealExit),
        ItemId::LongJump => Some(&items::BeginJump),
        ItemId::ReconDrone => Some(&items::BeginRecon),
        ItemId::AriadnesThread => Some(&items::ThreadToExit),
        ItemId::DetailedMapOfExit => Some(&items::RevealExitSurroundings),
        ItemId::PhilosophersStone => Some(&items::RevealWideArea),
        ItemId::ScrollOfChaos => Some(&items::ShuffleTraps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_exactly_one_definition() {
        for id in ItemId::ALL {
            assert_eq!(CATALOG.iter().filter(|def| def.id == id).count(), 1, "{id:?}");
        }
    }

    #[test]
    fn keys_are_unique_and_only_the_shield_is_passive() {
        let mut keys: Vec<char> = CATALOG.iter().filter_map(|def| def.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATALOG.len() - 1);
        assert_eq!(ItemId::TrapShield.key(), None);
        assert!(effect(ItemId::TrapShield).is_none());
        assert_eq!(ItemId::from_key('j'), Some(ItemId::LongJump));
        assert_eq!(ItemId::from_key('z'), None);
    }

    #[test]
    fn floor_bounds_gate_availability() {
        let floor_one = available_for_floor(1);
        assert!(floor_one.contains(&ItemId::RevealExit));
        assert!(!floor_one.contains(&ItemId::ReconDrone));
        assert!(!floor_one.contains(&ItemId::PhilosophersStone));

        let floor_nine = available_for_floor(9);
        assert!(!floor_nine.contains(&ItemId::RevealExit));
        assert!(floor_nine.contains(&ItemId::ReduceTraps));
        assert!(floor_nine.contains(&ItemId::AriadnesThread));

        let floor_eleven = available_for_floor(11);
        assert!(!floor_eleven.contains(&ItemId::ReduceTraps));
        assert!(floor_eleven.contains(&ItemId::ScrollOfChaos));
    }

    #[test]
    fn placeable_items_exclude_passives() {
        for floor in 1..=15 {
            let placeable = placeable_for_floor(floor);
            assert!(!placeable.contains(&ItemId::TrapShield));
            assert!(placeable.iter().all(|id| id.definition().is_available_on(floor)));
        }
    }
}
