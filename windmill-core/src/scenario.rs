//! Scenario driver - one schedule per table count
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_all (every table count)
//! - Level 2: run_scenario (one table count)
//! - Level 3: ScenarioRunner::play_round (one round)

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assignment::RoundAssignment;
use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::history::PairingHistory;
use crate::labels::{labels_for, TableLabel};
use crate::layout::SlotLayout;
use crate::optimizer::RoundOptimizer;
use crate::penalty::rotation_collisions;

/// Finished seating plan for one table count
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub layout: SlotLayout,
    /// Seating of every round, in order
    pub rounds: Vec<RoundAssignment>,
    /// Winning penalty of every round
    pub penalties: Vec<f64>,
}

impl Schedule {
    pub fn tables(&self) -> usize {
        self.layout.tables
    }

    pub fn players(&self) -> usize {
        self.layout.players()
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Table labels used by this scenario, in order
    pub fn labels(&self) -> impl Iterator<Item = TableLabel> {
        labels_for(self.layout.tables)
    }

    /// One slot's table in every round
    pub fn tables_of(&self, slot: usize) -> impl Iterator<Item = TableLabel> + '_ {
        self.rounds.iter().map(move |round| round.table_of(slot))
    }

    /// Sum of winning penalties
    pub fn total_penalty(&self) -> f64 {
        self.penalties.iter().sum()
    }

    /// Rotating pairs sharing a table, summed over all rounds
    pub fn rotation_collisions(&self) -> usize {
        self.rounds
            .iter()
            .map(|round| rotation_collisions(round, &self.layout))
            .sum()
    }
}

/// Round-by-round driver for a single scenario.
///
/// Owns the scenario's history; rounds are searched against the history as it
/// stood before the round and folded in once the winner is fixed.
#[derive(Debug)]
pub struct ScenarioRunner {
    optimizer: RoundOptimizer,
    history: PairingHistory,
    rounds: Vec<RoundAssignment>,
    penalties: Vec<f64>,
}

impl ScenarioRunner {
    pub fn new(layout: SlotLayout, optimizer: RoundOptimizer) -> Self {
        Self {
            optimizer,
            history: PairingHistory::new(layout),
            rounds: Vec::new(),
            penalties: Vec::new(),
        }
    }

    pub fn history(&self) -> &PairingHistory {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Search, accept and record the next round
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &RoundAssignment {
        let round = self.optimizer.optimize(&self.history, rng);
        debug_assert!(round.assignment.is_balanced(self.history.layout()));

        tracing::debug!(
            "Round {}: penalty={:e} (worst {:e}), rotating collisions={}, trial={}",
            self.rounds.len() + 1,
            round.penalty,
            round.worst_penalty,
            rotation_collisions(&round.assignment, self.history.layout()),
            round.trial
        );

        self.history.record(&round.assignment);
        self.penalties.push(round.penalty);
        self.rounds.push(round.assignment);
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn finish(self) -> Schedule {
        Schedule {
            layout: *self.history.layout(),
            rounds: self.rounds,
            penalties: self.penalties,
        }
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Generate schedules for 1..=max_tables tables, drawing from one random source
pub fn generate_all<R: Rng + ?Sized>(config: &ScheduleConfig, rng: &mut R) -> Result<Vec<Schedule>> {
    generate_with_callback(config, rng, |_| {})
}

/// Like [`generate_all`], calling `on_schedule` after each finished scenario
pub fn generate_with_callback<R, F>(
    config: &ScheduleConfig,
    rng: &mut R,
    mut on_schedule: F,
) -> Result<Vec<Schedule>>
where
    R: Rng + ?Sized,
    F: FnMut(&Schedule),
{
    config.validate()?;

    let mut schedules = Vec::with_capacity(config.max_tables);
    for tables in 1..=config.max_tables {
        let schedule = run_scenario(config, tables, rng)?;
        on_schedule(&schedule);
        schedules.push(schedule);
    }
    Ok(schedules)
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Generate the schedule for one table count from a clean history
pub fn run_scenario<R: Rng + ?Sized>(config: &ScheduleConfig, tables: usize, rng: &mut R) -> Result<Schedule> {
    let layout = SlotLayout::new(tables, config.seats_per_table)?;
    let mut runner = ScenarioRunner::new(layout, config.optimizer());

    for _ in 0..config.rounds {
        runner.play_round(rng);
    }

    let schedule = runner.finish();
    if tables < layout.rotating_size() {
        tracing::debug!(
            "{} tables cannot separate {} rotating players; collisions are unavoidable",
            tables,
            layout.rotating_size()
        );
    }
    tracing::info!(
        "Scenario {} tables / {} players: total penalty {:e}",
        tables,
        layout.players(),
        schedule.total_penalty()
    );
    Ok(schedule)
}
