//! Arguments shared by every command
//!
//! Level 4 - Configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use windmill_core::ScheduleConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct ScheduleArgs {
    /// JSON config file; flags below override its fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Players per table
    #[arg(long)]
    pub seats: Option<usize>,

    /// Largest table count to schedule
    #[arg(long)]
    pub max_tables: Option<usize>,

    /// Rounds per scenario
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Questions per round on the scoring sheet
    #[arg(long)]
    pub sub_periods: Option<usize>,

    /// Rounds per group in the printed roster (0 disables grouping)
    #[arg(long)]
    pub roster_group: Option<usize>,

    /// Random shuffles tried per round
    #[arg(long)]
    pub trials: Option<usize>,

    /// Score shuffles on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl ScheduleArgs {
    /// Resolve the final configuration: defaults, then config file, then flags
    pub fn resolve(&self, seed: Option<u64>) -> Result<ScheduleConfig> {
        let mut config = match &self.config {
            Some(path) => ScheduleConfig::load(path)?,
            None => ScheduleConfig::default(),
        };

        if let Some(seed) = seed {
            config.seed = seed;
        }
        if let Some(seats) = self.seats {
            config.seats_per_table = seats;
        }
        if let Some(max_tables) = self.max_tables {
            config.max_tables = max_tables;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(sub_periods) = self.sub_periods {
            config.sub_periods = sub_periods;
        }
        if let Some(roster_group) = self.roster_group {
            config.roster_group = roster_group;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if self.sequential {
            config.parallel = false;
        }

        config.validate().context("Invalid schedule configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = ScheduleArgs::default().resolve(None).unwrap();
        assert_eq!(config, ScheduleConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = ScheduleArgs {
            max_tables: Some(4),
            rounds: Some(2),
            trials: Some(64),
            sequential: true,
            ..Default::default()
        };
        let config = args.resolve(Some(12)).unwrap();
        assert_eq!(config.seed, 12);
        assert_eq!(config.max_tables, 4);
        assert_eq!(config.rounds, 2);
        assert_eq!(config.trials, 64);
        assert!(!config.parallel);
    }

    #[test]
    fn test_roster_group_flag() {
        let args = ScheduleArgs {
            roster_group: Some(0),
            ..Default::default()
        };
        assert_eq!(args.resolve(None).unwrap().roster_group, 0);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args = ScheduleArgs {
            max_tables: Some(99),
            ..Default::default()
        };
        assert!(args.resolve(None).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = ScheduleArgs {
            config: Some(PathBuf::from("/nonexistent/windmill.json")),
            ..Default::default()
        };
        assert!(args.resolve(None).is_err());
    }
}
