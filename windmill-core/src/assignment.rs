//! Round assignment - one round's slot to table mapping

use serde::{Deserialize, Serialize};

use crate::labels::{labels_for, TableLabel};
use crate::layout::SlotLayout;

/// Table label for every player slot in one round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundAssignment {
    labels: Vec<TableLabel>,
}

impl RoundAssignment {
    /// Unshuffled sequence: each label repeated `seats_per_table` times, in label order
    pub fn canonical(layout: &SlotLayout) -> Self {
        let labels = labels_for(layout.tables)
            .flat_map(|label| std::iter::repeat(label).take(layout.seats_per_table))
            .collect();
        Self { labels }
    }

    pub fn from_labels(labels: Vec<TableLabel>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Table for a player slot
    pub fn table_of(&self, slot: usize) -> TableLabel {
        self.labels[slot]
    }

    pub fn labels(&self) -> &[TableLabel] {
        &self.labels
    }

    pub(crate) fn labels_mut(&mut self) -> &mut [TableLabel] {
        &mut self.labels
    }

    /// Occupancy per table, indexed by label index
    pub fn table_counts(&self, tables: usize) -> Vec<usize> {
        let mut counts = vec![0; tables];
        for label in &self.labels {
            if let Some(count) = counts.get_mut(label.index()) {
                *count += 1;
            }
        }
        counts
    }

    /// Every table of the layout holds exactly `seats_per_table` players
    pub fn is_balanced(&self, layout: &SlotLayout) -> bool {
        self.labels.len() == layout.players()
            && self.labels.iter().all(|l| l.index() < layout.tables)
            && self
                .table_counts(layout.tables)
                .iter()
                .all(|&c| c == layout.seats_per_table)
    }

    /// Printed labels, one character per slot
    pub fn to_label_string(&self) -> String {
        self.labels.iter().map(|l| l.as_char()).collect()
    }
}
