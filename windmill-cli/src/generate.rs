//! Generate command - build every scenario and write the printable outputs
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: generate_schedules(), save_results()
//! - Level 3: save_sheets(), save_roster(), save_json()
//! - Level 4: progress bar, output paths

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use windmill_core::{generate_with_callback, Schedule, ScheduleConfig};
use windmill_render::{sheet_file_name, Roster, ScoringSheet, ROSTER_FILE_NAME};

use crate::args::ScheduleArgs;

/// Name of the resolved config written next to the outputs
const CONFIG_FILE_NAME: &str = "windmill.json";

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Output directory for sheets and roster
    #[arg(long, default_value = ".")]
    pub output: PathBuf,

    /// Also write all schedules as schedules.json
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
///
/// 1. Resolve configuration
/// 2. Generate one schedule per table count
/// 3. Write sheets, roster, the resolved config and optional JSON
pub fn run(args: GenerateArgs, seed: Option<u64>) -> Result<()> {
    let config = args.schedule.resolve(seed)?;

    tracing::info!(
        "Generating schedules: tables=1..={}, seats={}, rounds={}, trials={}, seed={}",
        config.max_tables,
        config.seats_per_table,
        config.rounds,
        config.trials,
        config.seed
    );

    let schedules = generate_schedules(&config, !args.quiet)?;
    save_results(&schedules, &config, &args)?;

    print_summary(&schedules, &args.output);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Run every scenario from one seeded random stream
fn generate_schedules(config: &ScheduleConfig, show_progress: bool) -> Result<Vec<Schedule>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let progress = create_progress_bar(config.max_tables, show_progress)?;

    let schedules = generate_with_callback(config, &mut rng, |schedule| {
        progress.set_message(format!("{} players", schedule.players()));
        progress.inc(1);
    })?;

    progress.finish_and_clear();
    Ok(schedules)
}

/// Write every output file
fn save_results(schedules: &[Schedule], config: &ScheduleConfig, args: &GenerateArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    save_sheets(schedules, config, &args.output)?;
    save_roster(schedules, config, &args.output)?;
    save_config(config, &args.output)?;

    if args.json {
        save_json(schedules, &args.output)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// One scoring sheet per scenario
fn save_sheets(schedules: &[Schedule], config: &ScheduleConfig, output: &Path) -> Result<()> {
    for schedule in schedules {
        let path = output.join(sheet_file_name(schedule.players()));
        ScoringSheet::build(schedule, config.sub_periods).save(&path)?;
        tracing::debug!("Saved scoring sheet to {}", path.display());
    }
    tracing::info!("Saved {} scoring sheets", schedules.len());
    Ok(())
}

/// Single roster covering all scenarios
fn save_roster(schedules: &[Schedule], config: &ScheduleConfig, output: &Path) -> Result<()> {
    let mut roster = Roster::new(config.max_players(), config.roster_group);
    for schedule in schedules {
        roster.add_schedule(schedule);
    }

    let path = output.join(ROSTER_FILE_NAME);
    roster.save(&path)?;
    tracing::info!("Saved roster to {}", path.display());
    Ok(())
}

/// Resolved config, so a run can be repeated with `--config`
fn save_config(config: &ScheduleConfig, output: &Path) -> Result<()> {
    let path = output.join(CONFIG_FILE_NAME);
    config.save(&path)?;
    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

fn save_json(schedules: &[Schedule], output: &Path) -> Result<()> {
    let path = output.join("schedules.json");
    let content = serde_json::to_string_pretty(schedules)?;
    std::fs::write(&path, content).context("Failed to write schedules JSON")?;
    tracing::info!("Saved schedules to {}", path.display());
    Ok(())
}

/// Print summary to console
fn print_summary(schedules: &[Schedule], output: &Path) {
    println!("\n=== Schedules Complete ===");
    println!("Scenarios: {}", schedules.len());

    for schedule in schedules {
        let collisions = schedule.rotation_collisions();
        if collisions > 0 {
            println!(
                "  {:>3} players: {} rotating collisions over {} rounds",
                schedule.players(),
                collisions,
                schedule.round_count()
            );
        }
    }

    println!("Output directory: {}", output.display());
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_progress_bar(scenarios: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new(scenarios as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} scenarios {msg} ({eta})")?
            .progress_chars("=> "),
    );
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_results_writes_all_outputs() {
        let output = std::env::temp_dir().join(format!("windmill-generate-{}", std::process::id()));
        let args = GenerateArgs {
            schedule: ScheduleArgs {
                max_tables: Some(2),
                rounds: Some(2),
                trials: Some(16),
                ..Default::default()
            },
            output: output.clone(),
            json: true,
            quiet: true,
        };
        let config = args.schedule.resolve(Some(7)).unwrap();
        let schedules = generate_schedules(&config, false).unwrap();

        save_results(&schedules, &config, &args).unwrap();

        assert!(output.join("~table6.csv").exists());
        assert!(output.join("~table12.csv").exists());
        assert!(output.join(ROSTER_FILE_NAME).exists());
        assert!(output.join("schedules.json").exists());
        let saved = ScheduleConfig::load(&output.join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(saved, config);

        std::fs::remove_dir_all(&output).unwrap();
    }
}
