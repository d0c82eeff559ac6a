//! Configuration for schedule generation
//!
//! Level 4 - Utilities and configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::labels::MAX_TABLES;
use crate::optimizer::{RoundOptimizer, DEFAULT_TRIALS};
use crate::penalty::{PenaltyEvaluator, CROSS_PAIRING_WEIGHT, ROTATION_COLLISION_PENALTY};

/// Seed of the reference schedules
pub const DEFAULT_SEED: u64 = 566;

/// Every knob of a generation run.
///
/// Missing fields in a JSON config fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Random seed for the whole run
    pub seed: u64,
    /// Players per table
    pub seats_per_table: usize,
    /// Scenarios are generated for 1..=max_tables tables
    pub max_tables: usize,
    /// Rounds per scenario
    pub rounds: usize,
    /// Scored questions per round
    pub sub_periods: usize,
    /// Rounds per group in the printed roster
    pub roster_group: usize,
    /// Shuffles tried per round
    pub trials: usize,
    /// Score shuffles on the rayon pool
    pub parallel: bool,
    /// Cost of two rotating players at one table.
    ///
    /// `validate` only requires this to exceed `cross_pairing_weight`, which
    /// does not by itself make every collision worse than any history cost.
    /// That holds while the cross-pairing cost one collision can avoid, at most
    /// `cross_pairing_weight` times a few history counts of at most `rounds`,
    /// stays below this value. The defaults (1e9 against 1e7 over 8 rounds) do.
    pub rotation_collision_penalty: f64,
    /// Cost per earlier pairing of an anchor with a rotating player
    pub cross_pairing_weight: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            seats_per_table: 6,
            max_tables: MAX_TABLES,
            rounds: 8,
            sub_periods: 4,
            roster_group: 4,
            trials: DEFAULT_TRIALS,
            parallel: true,
            rotation_collision_penalty: ROTATION_COLLISION_PENALTY,
            cross_pairing_weight: CROSS_PAIRING_WEIGHT,
        }
    }
}

impl ScheduleConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Limit generation to 1..=max_tables tables
    pub fn with_max_tables(mut self, max_tables: usize) -> Self {
        self.max_tables = max_tables;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seats(mut self, seats_per_table: usize) -> Self {
        self.seats_per_table = seats_per_table;
        self
    }

    /// Disable parallel scoring
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Largest player count over all scenarios
    pub fn max_players(&self) -> usize {
        self.max_tables * self.seats_per_table
    }

    /// Check every field that scenario setup relies on
    pub fn validate(&self) -> Result<()> {
        if self.max_tables == 0 {
            return Err(ScheduleError::NoTables);
        }
        if self.max_tables > MAX_TABLES {
            return Err(ScheduleError::too_many_tables(self.max_tables));
        }
        if self.seats_per_table == 0 {
            return Err(ScheduleError::NoSeats);
        }
        if self.max_tables.checked_mul(self.seats_per_table).is_none() {
            return Err(ScheduleError::TooManyPlayers {
                tables: self.max_tables,
                seats_per_table: self.seats_per_table,
            });
        }
        if self.rounds == 0 {
            return Err(ScheduleError::NoRounds);
        }
        if self.trials == 0 {
            return Err(ScheduleError::NoTrials);
        }
        if self.sub_periods == 0 {
            return Err(ScheduleError::NoSubPeriods);
        }
        check_weight("rotation_collision_penalty", self.rotation_collision_penalty)?;
        check_weight("cross_pairing_weight", self.cross_pairing_weight)?;
        if self.rotation_collision_penalty <= self.cross_pairing_weight {
            return Err(ScheduleError::WeightOrdering {
                rotation: self.rotation_collision_penalty,
                cross: self.cross_pairing_weight,
            });
        }
        Ok(())
    }

    pub fn evaluator(&self) -> PenaltyEvaluator {
        PenaltyEvaluator::new(self.rotation_collision_penalty, self.cross_pairing_weight)
    }

    pub fn optimizer(&self) -> RoundOptimizer {
        RoundOptimizer {
            trials: self.trials,
            parallel: self.parallel,
            evaluator: self.evaluator(),
        }
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ScheduleConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidWeight { name, value })
    }
}
