use tracing::debug;

use crate::{
    config::RulesError,
    game::Game,
    journal::{InputJournal, JOURNAL_FORMAT_VERSION},
};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("unsupported journal format version {0}")]
    UnsupportedFormat(u16),
    #[error("journal rules are invalid")]
    InvalidRules(#[from] RulesError),
    #[error("input #{found} out of order; expected #{expected}")]
    OutOfOrder { expected: u64, found: u64 },
    #[error("input #{seq} recorded after the run had ended")]
    InputAfterGameOver { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_floor: u32,
    pub final_turn: u32,
    pub game_over: bool,
}

/// Replays a journal from a fresh game with the recorded seed and rules.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat(journal.format_version));
    }
    let mut game = Game::try_with_rules(journal.seed, journal.rules.clone())?;
    game.setup_floor();

    for (expected, record) in (0u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::OutOfOrder { expected, found: record.seq });
        }
        if game.step(&record.token).is_game_over() && expected + 1 < journal.inputs.len() as u64 {
            return Err(ReplayError::InputAfterGameOver { seq: expected + 1 });
        }
    }

    debug!(seed = journal.seed, inputs = journal.inputs.len(), "journal replayed");
    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        final_floor: game.floor(),
        final_turn: game.turn(),
        game_over: game.game_loop().is_game_over(),
    })
}
