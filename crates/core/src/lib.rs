pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
mod random;
pub mod replay;
pub mod state;
pub mod topology;
pub mod types;

pub use config::{Rules, RulesError};
pub use content::{ItemDef, ItemId};
pub use game::{Game, Player};
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{GeneratedFloor, generate_floor};
pub use replay::*;
pub use state::{Cell, Grid};
pub use types::*;
