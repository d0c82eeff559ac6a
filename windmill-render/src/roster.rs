//! Printable player roster across all scenarios
//!
//! Each player gets a block with a name line and one entry per scenario:
//! `<players>: <tables by round>; `. Rounds are split into groups with
//! [`GROUP_DELIMITER`], and slots beyond a scenario's player count print
//! [`ABSENT`].

use std::path::Path;

use anyhow::Context;

use windmill_core::Schedule;

/// Printed for a slot that does not play in a scenario
pub const ABSENT: char = '-';

/// Separates groups of rounds
pub const GROUP_DELIMITER: char = '.';

/// File name of the printed roster
pub const ROSTER_FILE_NAME: &str = "~print.txt";

#[derive(Clone, Debug)]
pub struct Roster {
    /// Rounds per group; 0 disables grouping
    group: usize,
    width: usize,
    lines: Vec<String>,
}

impl Roster {
    /// Empty roster for slots 0..max_players
    pub fn new(max_players: usize, group: usize) -> Self {
        let width = max_players.to_string().len();
        let lines = (1..=max_players)
            .map(|n| format!("Player {n:0width$}.\t Name: \n\n\nPlayer {n:0width$}.\n"))
            .collect();
        Self { group, width, lines }
    }

    /// Append one scenario's entry to every player
    pub fn add_schedule(&mut self, schedule: &Schedule) {
        let width = self.width;
        let players = schedule.players();
        let rounds = schedule.round_count();

        for (slot, line) in self.lines.iter_mut().enumerate() {
            line.push_str(&format!("{players:0width$}: "));
            for (round, assignment) in schedule.rounds.iter().enumerate() {
                let c = if slot < players {
                    assignment.table_of(slot).as_char()
                } else {
                    ABSENT
                };
                line.push(c);
                let played = round + 1;
                if self.group > 0 && played < rounds && played % self.group == 0 {
                    line.push(GROUP_DELIMITER);
                }
            }
            line.push_str("; ");
        }
    }

    /// Text of one player's block
    pub fn line(&self, slot: usize) -> Option<&str> {
        self.lines.get(slot).map(String::as_str)
    }

    /// Full roster text, blocks separated by blank lines
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str("\n\n\n");
        }
        out
    }

    /// Write rendered roster to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write roster {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windmill_core::{RoundAssignment, SlotLayout, TableLabel};

    fn assignment(s: &str) -> RoundAssignment {
        RoundAssignment::from_labels(s.chars().filter_map(TableLabel::from_char).collect())
    }

    fn schedule(tables: usize, rounds: &[&str]) -> Schedule {
        Schedule {
            layout: SlotLayout::new(tables, 2).unwrap(),
            rounds: rounds.iter().map(|r| assignment(r)).collect(),
            penalties: vec![0.0; rounds.len()],
        }
    }

    #[test]
    fn test_header_is_zero_padded() {
        let roster = Roster::new(12, 4);
        assert_eq!(roster.line(0), Some("Player 01.\t Name: \n\n\nPlayer 01.\n"));
        assert_eq!(roster.line(11), Some("Player 12.\t Name: \n\n\nPlayer 12.\n"));
        assert_eq!(roster.line(12), None);
    }

    #[test]
    fn test_absent_players() {
        let mut roster = Roster::new(4, 4);
        roster.add_schedule(&schedule(1, &["AA", "AA"]));

        assert!(roster.line(0).unwrap().ends_with("2: AA; "));
        assert!(roster.line(3).unwrap().ends_with("2: --; "));
    }

    #[test]
    fn test_group_delimiter_between_groups_only() {
        let mut roster = Roster::new(4, 4);
        let rounds = ["ABAB", "BABA", "AABB", "BBAA", "ABBA", "BAAB", "ABAB", "BABA"];
        roster.add_schedule(&schedule(2, &rounds));

        assert!(roster.line(0).unwrap().ends_with("4: ABAB.ABAB; "));
        assert!(roster.line(3).unwrap().ends_with("4: BABA.ABBA; "));
    }

    #[test]
    fn test_scenarios_append_in_order() {
        let mut roster = Roster::new(4, 4);
        roster.add_schedule(&schedule(1, &["AA"]));
        roster.add_schedule(&schedule(2, &["BAAB"]));

        assert_eq!(
            roster.line(1),
            Some("Player 2.\t Name: \n\n\nPlayer 2.\n2: A; 4: A; ")
        );
        assert_eq!(
            roster.line(3),
            Some("Player 4.\t Name: \n\n\nPlayer 4.\n2: -; 4: B; ")
        );
    }

    #[test]
    fn test_render_separates_blocks() {
        let roster = Roster::new(2, 4);
        let text = roster.render();
        assert!(text.starts_with("Player 1.\t Name: \n\n\nPlayer 1.\n\n\n\nPlayer 2."));
        assert!(text.ends_with("\n\n\n"));
    }
}
