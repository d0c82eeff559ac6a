//! Configuration errors raised at scenario setup

use crate::labels::MAX_TABLES;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Table count must be at least 1")]
    NoTables,

    #[error("Table count {requested} exceeds the {max} available labels")]
    TooManyTables { requested: usize, max: usize },

    #[error("Seats per table must be at least 1")]
    NoSeats,

    #[error("{tables} tables of {seats_per_table} seats overflow the player count")]
    TooManyPlayers { tables: usize, seats_per_table: usize },

    #[error("Rotating group of {rotating} slots does not fit among {players} players")]
    RotatingGroupTooLarge { rotating: usize, players: usize },

    #[error("Round count must be at least 1")]
    NoRounds,

    #[error("Trial count must be at least 1")]
    NoTrials,

    #[error("Sub-period count must be at least 1")]
    NoSubPeriods,

    #[error("Penalty weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Rotation collision penalty {rotation} must exceed cross-pairing weight {cross}")]
    WeightOrdering { rotation: f64, cross: f64 },
}

impl ScheduleError {
    pub(crate) fn too_many_tables(requested: usize) -> Self {
        ScheduleError::TooManyTables {
            requested,
            max: MAX_TABLES,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
