//! Windmill Render - Printable outputs for generated schedules
//!
//! - Scoring sheets: one CSV per scenario with per-round and total formulas
//! - Roster: one line per player listing their table in every round
//! - Spreadsheet cell references in A1 notation

pub mod cell;
pub mod roster;
pub mod sheet;

pub use cell::{cell_ref, column_name};
pub use roster::{Roster, ABSENT, GROUP_DELIMITER, ROSTER_FILE_NAME};
pub use sheet::{sheet_file_name, ScoringSheet};
