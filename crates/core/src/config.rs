//! Tunable rule constants for floor generation and progression.

use serde::{Deserialize, Serialize};
use toml::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Revealed fraction at or above which a cleared floor earns a reward offer.
    pub revelation_threshold: f64,
    pub max_generation_attempts: u32,
    pub obscure_ratio: f64,
    pub obscure_from_floor: u32,
    pub base_grid_size: usize,
    pub grid_growth_divisor: u32,
    pub base_traps: usize,
    pub traps_per_floor: usize,
    pub base_items: usize,
    pub offer_count: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            revelation_threshold: 0.5,
            max_generation_attempts: 100,
            obscure_ratio: 0.15,
            obscure_from_floor: 5,
            base_grid_size: 8,
            grid_growth_divisor: 3,
            base_traps: 6,
            traps_per_floor: 2,
            base_items: 2,
            offer_count: 3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to parse rules: {0}")]
    Parse(#[from] de::Error),
    #[error("invalid rules: {0}")]
    Invalid(&'static str),
}

impl Rules {
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let rules: Rules = toml::from_str(source)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if !(0.0..=1.0).contains(&self.revelation_threshold) {
            return Err(RulesError::Invalid("revelation_threshold must be within 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.obscure_ratio) {
            return Err(RulesError::Invalid("obscure_ratio must be within 0..=1"));
        }
        if self.max_generation_attempts == 0 {
            return Err(RulesError::Invalid("max_generation_attempts must be positive"));
        }
        if self.grid_growth_divisor == 0 {
            return Err(RulesError::Invalid("grid_growth_divisor must be positive"));
        }
        // The start cell and its neighbourhood must fit with room for an exit.
        if self.base_grid_size < 4 {
            return Err(RulesError::Invalid("base_grid_size must be at least 4"));
        }
        if self.offer_count == 0 {
            return Err(RulesError::Invalid("offer_count must be positive"));
        }
        Ok(())
    }

    pub fn grid_size(&self, floor: u32) -> usize {
        self.base_grid_size + (floor / self.grid_growth_divisor) as usize
    }

    pub fn trap_count(&self, floor: u32) -> usize {
        self.base_traps + self.traps_per_floor * floor as usize
    }

    pub fn item_count(&self, floor: u32) -> usize {
        self.base_items + floor as usize
    }

    pub fn obscures(&self, floor: u32) -> bool {
        floor >= self.obscure_from_floor
    }
}
