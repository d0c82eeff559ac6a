//! Windmill Core - Table seating schedules for multi-round quizzes
//!
//! This crate provides the scheduling engine:
//! - Table label alphabet and slot layout (anchor / rotating groups)
//! - Round assignments with the one-table-per-seat-block invariant
//! - Penalty scoring against cross-round pairing history
//! - Best-of-N random search per round
//! - Scenario driver producing one schedule per table count

pub mod labels;
pub mod layout;
pub mod assignment;
pub mod history;
pub mod penalty;
pub mod optimizer;
pub mod scenario;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use labels::{TableLabel, TABLE_LABELS, MAX_TABLES, labels_for};
pub use layout::SlotLayout;
pub use assignment::RoundAssignment;
pub use history::PairingHistory;
pub use penalty::{PenaltyEvaluator, rotation_collisions, ROTATION_COLLISION_PENALTY, CROSS_PAIRING_WEIGHT};
pub use optimizer::{RoundOptimizer, OptimizedRound, draw_candidates, DEFAULT_TRIALS};
pub use scenario::{Schedule, ScenarioRunner, generate_all, generate_with_callback, run_scenario};
pub use config::{ScheduleConfig, DEFAULT_SEED};
pub use error::ScheduleError;
