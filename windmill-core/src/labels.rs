//! Table label alphabet

use serde::{Deserialize, Serialize};

/// Ordered table symbols. The digits 0 and 1 are skipped since they read as O and I.
pub const TABLE_LABELS: &[u8; 34] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ23456789";

/// Largest table count the alphabet can name
pub const MAX_TABLES: usize = TABLE_LABELS.len();

/// One table, identified by its position in [`TABLE_LABELS`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct TableLabel(u8);

impl TableLabel {
    /// Label for table `index`, or `None` past the end of the alphabet
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_TABLES).then(|| Self(index as u8))
    }

    /// Position in the alphabet (also the table's row in the scoring sheet)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        TABLE_LABELS[self.0 as usize] as char
    }

    /// Look up a label by its printed symbol
    pub fn from_char(c: char) -> Option<Self> {
        TABLE_LABELS
            .iter()
            .position(|&b| b as char == c)
            .map(|i| Self(i as u8))
    }
}

impl std::fmt::Display for TableLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<TableLabel> for char {
    fn from(label: TableLabel) -> Self {
        label.as_char()
    }
}

impl TryFrom<char> for TableLabel {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or_else(|| format!("unknown table label: {:?}", c))
    }
}

/// The first `tables` labels, in alphabet order
pub fn labels_for(tables: usize) -> impl Iterator<Item = TableLabel> {
    (0..tables.min(MAX_TABLES)).map(|i| TableLabel(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(TableLabel::new(0).map(TableLabel::as_char), Some('A'));
        assert_eq!(TableLabel::new(25).map(TableLabel::as_char), Some('Z'));
        assert_eq!(TableLabel::new(26).map(TableLabel::as_char), Some('2'));
        assert_eq!(TableLabel::new(33).map(TableLabel::as_char), Some('9'));
        assert_eq!(TableLabel::new(34), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(TableLabel::from_char('C').map(TableLabel::index), Some(2));
        assert_eq!(TableLabel::from_char('2').map(TableLabel::index), Some(26));
        assert_eq!(TableLabel::from_char('1'), None);
        assert_eq!(TableLabel::from_char('a'), None);
    }

    #[test]
    fn test_labels_for() {
        let labels: String = labels_for(4).map(TableLabel::as_char).collect();
        assert_eq!(labels, "ABCD");
        assert_eq!(labels_for(100).count(), MAX_TABLES);
    }

    #[test]
    fn test_serde_as_char() {
        let label = TableLabel::from_char('Q').unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"Q\"");
        let back: TableLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
        assert!(serde_json::from_str::<TableLabel>("\"0\"").is_err());
    }
}
