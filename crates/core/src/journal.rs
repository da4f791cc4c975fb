use crate::config::Rules;

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to reproduce a run: the seed, the rules it was played
/// under, and every raw token in the order it was submitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub rules: Rules,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub token: String,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u64, rules: Rules) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, rules, inputs: Vec::new() }
    }

    /// Appends a token, ignored ones included, so replays see the same stream.
    pub fn record(&mut self, token: impl Into<String>) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, token: token.into() });
    }
}
