//! Scoring sheet - per-scenario CSV with score formulas
//!
//! Layout, 0-based (row, column):
//! - (t, 0): "Table X" header of table t
//! - (tables, 1 + q): question number q + 1
//! - block of `sub_periods` question columns per round; table t's scores go in row t
//! - player block starting at column 1 + questions: name, grand total, round totals
//!
//! Round totals reference the player's table row for that round's questions,
//! so entering table scores fills in every player.

use std::path::Path;

use anyhow::Context;

use windmill_core::Schedule;

use crate::cell::cell_ref;

/// File name used for a scenario's sheet
pub fn sheet_file_name(players: usize) -> String {
    format!("~table{}.csv", players)
}

/// Grid of cell texts, rows by columns
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringSheet {
    cells: Vec<Vec<String>>,
}

impl ScoringSheet {
    /// Lay out the sheet for a schedule with `sub_periods` questions per round
    pub fn build(schedule: &Schedule, sub_periods: usize) -> Self {
        let tables = schedule.tables();
        let players = schedule.players();
        let rounds = schedule.round_count();
        let questions = rounds * sub_periods;

        let rows = players.max(tables + 1);
        let columns = 3 + questions + rounds;
        let mut cells = vec![vec![String::new(); columns]; rows];

        for label in schedule.labels() {
            cells[label.index()][0] = format!("Table {}", label);
        }
        for q in 0..questions {
            cells[tables][1 + q] = (q + 1).to_string();
        }

        let name_col = 1 + questions;
        let total_col = name_col + 1;
        let first_round_col = name_col + 2;

        for player in 0..players {
            cells[player][name_col] = format!("Player {}", player + 1);

            for (round, table) in schedule.tables_of(player).enumerate() {
                let refs: Vec<String> = (0..sub_periods)
                    .map(|k| cell_ref(table.index(), 1 + round * sub_periods + k))
                    .collect();
                cells[player][first_round_col + round] = format!("={}", refs.join("+"));
            }

            let refs: Vec<String> = (0..rounds)
                .map(|round| cell_ref(player, first_round_col + round))
                .collect();
            cells[player][total_col] = format!("={}", refs.join("+"));
        }

        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Text of a cell; empty outside the grid
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    /// Every cell followed by a comma, one line per row
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            for cell in row {
                out.push_str(cell);
                out.push(',');
            }
            out.push('\n');
        }
        out
    }

    /// Write CSV to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_csv())
            .with_context(|| format!("Failed to write scoring sheet {}", path.display()))
    }
}
