//! Show command - print one scenario's seating
//!
//! Earlier scenarios are still generated so the output matches the
//! `generate` run for the same seed.

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use windmill_core::{generate_all, Schedule, ScheduleConfig};

use crate::args::ScheduleArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Table count of the scenario to print
    #[arg(long)]
    pub tables: usize,
}

pub fn run(args: ShowArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(&args, seed)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let schedules = generate_all(&config, &mut rng)?;
    let schedule = schedules
        .last()
        .context("No scenario generated")?;

    print!("{}", format_schedule(schedule));
    Ok(())
}

/// `--tables` takes the place of `--max-tables`
fn resolve_config(args: &ShowArgs, seed: Option<u64>) -> Result<ScheduleConfig> {
    if let Some(max_tables) = args.schedule.max_tables {
        anyhow::bail!(
            "--max-tables {} conflicts with --tables {}; show only takes --tables",
            max_tables,
            args.tables
        );
    }

    let mut schedule_args = args.schedule.clone();
    schedule_args.max_tables = Some(args.tables);
    schedule_args.resolve(seed)
}

/// Player lines followed by per-round penalties
fn format_schedule(schedule: &Schedule) -> String {
    let width = schedule.players().to_string().len();
    let mut out = format!(
        "{} tables, {} players, {} rounds\n",
        schedule.tables(),
        schedule.players(),
        schedule.round_count()
    );

    for slot in 0..schedule.players() {
        let tables: String = schedule.tables_of(slot).map(|t| t.as_char()).collect();
        let marker = if schedule.layout.is_rotating(slot) { " *" } else { "" };
        out.push_str(&format!("{:>width$}: {}{}\n", slot + 1, tables, marker));
    }

    for (round, penalty) in schedule.penalties.iter().enumerate() {
        out.push_str(&format!("round {}: penalty {:e}\n", round + 1, penalty));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use windmill_core::{RoundAssignment, SlotLayout, TableLabel};

    #[test]
    fn test_tables_sets_scenario_count() {
        let args = ShowArgs {
            schedule: ScheduleArgs::default(),
            tables: 5,
        };
        assert_eq!(resolve_config(&args, None).unwrap().max_tables, 5);
    }

    #[test]
    fn test_max_tables_flag_rejected() {
        let args = ShowArgs {
            schedule: ScheduleArgs {
                max_tables: Some(3),
                ..Default::default()
            },
            tables: 5,
        };
        let err = resolve_config(&args, None).unwrap_err();
        assert!(err.to_string().contains("--max-tables"));
    }

    #[test]
    fn test_format_schedule_marks_rotating_slots() {
        let labels = |s: &str| {
            RoundAssignment::from_labels(s.chars().filter_map(TableLabel::from_char).collect())
        };
        let schedule = Schedule {
            layout: SlotLayout::new(2, 2).unwrap(),
            rounds: vec![labels("ABBA"), labels("BAAB")],
            penalties: vec![0.0, 1e7],
        };

        let text = format_schedule(&schedule);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 tables, 4 players, 2 rounds");
        assert_eq!(lines[1], "1: AB");
        assert_eq!(lines[4], "4: AB *");
        assert_eq!(lines[6], "round 2: penalty 1e7");
    }
}
